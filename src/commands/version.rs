//! Version command implementation

use std::fmt;

use crate::error::Result;
use crate::routes::DEFAULT_PREFIX;

/// What `hexo2astro version` reports
#[derive(Debug, Clone, PartialEq, Eq)]
struct BuildInfo {
    version: &'static str,
    min_rust: &'static str,
    profile: &'static str,
    route_prefix: &'static str,
}

impl BuildInfo {
    fn current() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            min_rust: env!("CARGO_PKG_RUST_VERSION"),
            profile: if cfg!(debug_assertions) {
                "debug"
            } else {
                "release"
            },
            route_prefix: DEFAULT_PREFIX,
        }
    }
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "hexo2astro {}", self.version)?;
        writeln!(f)?;
        writeln!(f, "Build info:")?;
        writeln!(f, "  Minimum Rust: {}", self.min_rust)?;
        writeln!(f, "  Profile: {}", self.profile)?;
        write!(f, "  Default route prefix: {}", self.route_prefix)
    }
}

/// Run version command
pub fn run() -> Result<()> {
    println!("{}", BuildInfo::current());
    Ok(())
}
