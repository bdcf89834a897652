use std::io::{self, Write};

use tracing::{info, warn};

use super::{codec, ConfigModel};

/// Interactive editing surface seeded with a config.
pub trait InteractiveFlow {
    fn open(&mut self, seed: ConfigModel);
}

/// Writes the seed config to a sink as JSON for the user to edit and re-run with `-c`.
#[derive(Debug)]
pub struct ConsoleFlow<W> {
    out: W,
}

impl ConsoleFlow<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> ConsoleFlow<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> InteractiveFlow for ConsoleFlow<W> {
    fn open(&mut self, seed: ConfigModel) {
        info!(
            target: "ue_launcher::flow",
            engine = %seed.engine,
            tool = %seed.tool,
            project = %seed.project,
            "Opening launch config"
        );
        let written = codec::serialize(&seed)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
            .and_then(|text| writeln!(self.out, "{text}"));
        if let Err(err) = written {
            warn!(
                target: "ue_launcher::flow",
                reason = %err,
                "Failed to print launch config"
            );
        }
    }
}
