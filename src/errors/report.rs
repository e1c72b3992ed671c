// src/errors/report.rs
//! Rendering for miette diagnostics.

use miette::{Diagnostic, GraphicalReportHandler, GraphicalTheme, ThemeCharacters, ThemeStyles};

/// Render a diagnostic: unicode and ANSI colors when `color` is set, plain
/// ascii otherwise.
pub fn render(report: &dyn Diagnostic, color: bool) -> String {
    let theme = if color {
        GraphicalTheme {
            characters: ThemeCharacters::unicode(),
            styles: ThemeStyles::ansi(),
        }
    } else {
        GraphicalTheme {
            characters: ThemeCharacters::ascii(),
            styles: ThemeStyles::none(),
        }
    };
    let mut output = String::new();
    if GraphicalReportHandler::new_themed(theme)
        .render_report(&mut output, report)
        .is_err()
    {
        // Fall back to the bare message chain.
        output = report.to_string();
    }
    output
}
