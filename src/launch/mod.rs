//! Launch config model, codec, resolution, persistence, process launch, and dispatch.
pub mod codec;
pub mod dispatcher;
pub mod flow;
pub mod model;
pub mod persistence;
pub mod process;
pub mod resolver;

pub use dispatcher::{
    Directive, DirectiveOutcome, DirectiveResult, DispatchReport, LaunchDispatcher,
};
pub use flow::{ConsoleFlow, InteractiveFlow};
pub use model::ConfigModel;
pub use persistence::{ConfigPersistence, FILE_PREFIX, SLOT_LIMIT};
pub use process::{build_launch_args, LaunchReceipt, ProcessLauncher, SystemLauncher};
pub use resolver::{EngineResolver, EngineSource, UE4_EDITOR, UNREAL_EDITOR};
