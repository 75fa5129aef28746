use owo_colors::Style;
use std::sync::OnceLock;

static THEME: OnceLock<Theme> = OnceLock::new();

/// Styles for each kind of line the CLI prints.
///
/// Confirmations, listings and usage go to stdout; warnings and errors go
/// to stderr. Each group is colored only when its own stream supports it.
#[derive(Debug, Clone)]
pub struct Theme {
    pub header: Style,
    pub success: Style,
    pub empty: Style,
    pub usage: Style,
    pub error: Style,
    pub warn: Style,
}

impl Theme {
    pub fn detect() -> Self {
        Self::for_streams(console::colors_enabled(), console::colors_enabled_stderr())
    }

    pub fn for_streams(stdout: bool, stderr: bool) -> Self {
        Self {
            header: styled(stdout, Style::new().cyan().bold()),
            success: styled(stdout, Style::new().green().bold()),
            empty: styled(stdout, Style::new().bright_black().italic()),
            usage: styled(stdout, Style::new().dimmed()),
            error: styled(stderr, Style::new().red().bold()),
            warn: styled(stderr, Style::new().yellow().bold()),
        }
    }

    pub fn plain() -> Self {
        Self::for_streams(false, false)
    }
}

fn styled(enabled: bool, style: Style) -> Style {
    if enabled { style } else { Style::new() }
}

pub fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::detect)
}
