//! Runtime configuration for the terminal binary.
//!
//! Layered: built-in defaults, then environment variables, then command-line
//! flags. Environment values that fail to parse are ignored; bad flags are
//! reported to the user.

use anyhow::{anyhow, bail, Context, Result};

use crate::types::FRAME_MS;

pub const USAGE: &str = "\
usage: tui-flappy [--seed N] [--log PATH] [--no-bell] [--frame-ms N]

keys:  space / up / w / k   flap
       enter / r            start, play again
       q / esc / ctrl-c     quit

env:   FLAPPY_SEED, FLAPPY_LOG_PATH, FLAPPY_BELL=0, FLAPPY_LOG=<level>";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Gate RNG seed; `None` means pick one at startup
    pub seed: Option<u64>,
    /// Log file; logging stays off without one
    pub log_path: Option<String>,
    /// Ring the terminal bell on game over
    pub bell: bool,
    pub frame_ms: u32,
    pub show_help: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            log_path: None,
            bell: true,
            frame_ms: FRAME_MS,
            show_help: false,
        }
    }
}

impl Config {
    /// Build from the process environment and `std::env::args()`.
    pub fn load() -> Result<Self> {
        Self::from_sources(|key| std::env::var(key).ok(), std::env::args().skip(1))
    }

    /// Build from an environment lookup and the arguments after the program name.
    pub fn from_sources<E, I>(env: E, args: I) -> Result<Self>
    where
        E: Fn(&str) -> Option<String>,
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        config.apply_env(env);
        config.apply_args(args)?;
        Ok(config)
    }

    fn apply_env(&mut self, env: impl Fn(&str) -> Option<String>) {
        if let Some(seed) = env("FLAPPY_SEED").and_then(|s| s.trim().parse().ok()) {
            self.seed = Some(seed);
        }

        if let Some(path) = env("FLAPPY_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
        {
            self.log_path = Some(path);
        }

        if let Some(v) = env("FLAPPY_BELL") {
            self.bell = !matches!(v.trim().to_lowercase().as_str(), "0" | "false" | "off");
        }
    }

    fn apply_args(&mut self, args: impl IntoIterator<Item = String>) -> Result<()> {
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--seed" => {
                    let v = value(&mut args, "--seed")?;
                    self.seed = Some(v.parse().with_context(|| format!("invalid --seed {v:?}"))?);
                }
                "--log" => {
                    self.log_path = Some(value(&mut args, "--log")?);
                }
                "--no-bell" => self.bell = false,
                "--frame-ms" => {
                    let v = value(&mut args, "--frame-ms")?;
                    let ms: u32 = v
                        .parse()
                        .with_context(|| format!("invalid --frame-ms {v:?}"))?;
                    if ms == 0 {
                        bail!("--frame-ms must be at least 1");
                    }
                    self.frame_ms = ms;
                }
                "-h" | "--help" => self.show_help = true,
                other => bail!("unknown argument {other:?}\n\n{USAGE}"),
            }
        }
        Ok(())
    }
}

fn value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String> {
    args.next().ok_or_else(|| anyhow!("{flag} needs a value"))
}
