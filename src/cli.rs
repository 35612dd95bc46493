//! Command-line surface.

use std::path::PathBuf;

use clap::Parser;

/// Synchronize KDE Plasma, GTK, Konsole and VS Code themes in one pass.
///
/// Every flag is optional, but at least one setting must be requested.
/// Settings are applied independently; one failure does not stop the rest.
#[derive(Parser, Debug)]
#[command(name = "shadesync", author, version, about)]
pub struct Cli {
    /// Plasma global theme (look-and-feel package) to apply
    #[arg(short, long, value_name = "THEME")]
    pub plasma: Option<String>,

    /// GTK widget theme to apply
    #[arg(short, long, value_name = "THEME")]
    pub gtk: Option<String>,

    /// Wallpaper image to apply (path to file)
    #[arg(short, long, value_name = "FILE")]
    pub wallpaper: Option<PathBuf>,

    /// Konsole profile to apply (name without .profile)
    #[arg(short, long, value_name = "PROFILE")]
    pub konsole: Option<String>,

    /// VS Code color theme to apply
    #[arg(short = 'c', long, value_name = "THEME")]
    pub vscode: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Whether the invocation requests no setting at all.
    pub fn requests_nothing(&self) -> bool {
        self.plasma.is_none()
            && self.gtk.is_none()
            && self.wallpaper.is_none()
            && self.konsole.is_none()
            && self.vscode.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    /// What: Flags parse into their fields, long and short forms alike.
    ///
    /// Inputs:
    /// - A full command line mixing short and long flags.
    ///
    /// Output:
    /// - Every field populated with the given value.
    fn cli_parses_all_flags() {
        let cli = Cli::parse_from([
            "shadesync",
            "-p",
            "Aritim-Dark",
            "--gtk",
            "Adwaita-dark",
            "-w",
            "/tmp/wall.png",
            "--konsole",
            "Dark",
            "-c",
            "Solarized Dark",
            "-v",
        ]);
        assert_eq!(cli.plasma.as_deref(), Some("Aritim-Dark"));
        assert_eq!(cli.gtk.as_deref(), Some("Adwaita-dark"));
        assert_eq!(cli.wallpaper.as_deref(), Some(Path::new("/tmp/wall.png")));
        assert_eq!(cli.konsole.as_deref(), Some("Dark"));
        assert_eq!(cli.vscode.as_deref(), Some("Solarized Dark"));
        assert!(cli.verbose);
        assert!(!cli.requests_nothing());
    }

    #[test]
    /// What: A bare invocation requests nothing.
    ///
    /// Inputs:
    /// - Only the program name.
    ///
    /// Output:
    /// - `requests_nothing` is true.
    fn cli_bare_invocation_requests_nothing() {
        let cli = Cli::parse_from(["shadesync"]);
        assert!(cli.requests_nothing());
        assert!(!cli.verbose);
    }
}
