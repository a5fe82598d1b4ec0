//! One driver run: read a source file, lex it and report the result.

use std::io::Write;
use std::path::{Path, PathBuf};

use dreamc_i18n::{format_message, Localizer};
use dreamc_lex::serialize::{serialize, Format};
use dreamc_lex::{LexicalError, Token, TokenKind};
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{DriverError, Result};
use crate::source::read_source;

const RULE: &str = "===========================================";

/// What a run should print besides errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// List every token between two rules.
    pub show_tokens: bool,
    /// Serialize the token stream in this format.
    pub emit: Option<Format>,
    /// Write the serialized stream here instead of the output writer.
    pub output: Option<PathBuf>,
}

/// Driver state shared by every stage of a run.
pub struct Session {
    config: Config,
    localizer: Localizer,
}

impl Session {
    /// Creates a session.
    pub fn new(config: Config, localizer: Localizer) -> Self {
        Self { config, localizer }
    }

    /// The active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The localizer used for every user-facing message.
    pub fn localizer(&self) -> &Localizer {
        &self.localizer
    }

    /// Lexes `source` into a token list ending with `EOF_TOKEN`.
    pub fn lex(&self, source: &str) -> std::result::Result<Vec<Token>, LexicalError> {
        let tokens = dreamc_lex::tokenize(source)?;
        debug!(count = tokens.len(), "lexical analysis finished");
        Ok(tokens)
    }

    /// Runs the lexer over `path` and writes the report to `out`.
    ///
    /// With no options set, a one-line summary is written. `show_tokens`
    /// replaces the summary with the token listing. Emitting to `out`
    /// writes only the serialized document; emitting to a file keeps the
    /// summary or listing.
    pub fn run(&self, path: &Path, options: &RunOptions, out: &mut impl Write) -> Result<()> {
        if self.config.output.show_progress {
            debug!(path = %path.display(), "lexing");
        }

        let source = read_source(path)?;
        let tokens = self.lex(&source)?;

        if options.show_tokens {
            out.write_all(self.token_report(&tokens).as_bytes())?;
        }

        if let Some(format) = options.emit {
            let mut document = serialize(&tokens, format)?;
            if !document.ends_with('\n') {
                document.push('\n');
            }
            match &options.output {
                Some(file) => {
                    if let Some(parent) = file.parent().filter(|p| !p.as_os_str().is_empty()) {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(file, document)?;
                    info!(path = %file.display(), %format, "wrote token stream");
                },
                None => out.write_all(document.as_bytes())?,
            }
        }

        let emitted_to_out = options.emit.is_some() && options.output.is_none();
        if !options.show_tokens && !emitted_to_out {
            writeln!(out, "{}", self.summary(tokens.len()))?;
        }
        Ok(())
    }

    /// The `--tokens` listing. Line breaks are left out but counted.
    pub fn token_report(&self, tokens: &[Token]) -> String {
        let mut report = String::new();
        report.push_str(&self.localizer.gettext("Tokenization result"));
        report.push_str(":\n");
        report.push_str(RULE);
        report.push('\n');
        for token in tokens.iter().filter(|t| t.kind() != TokenKind::Linebreak) {
            report.push_str(&token.to_string());
            report.push('\n');
        }
        report.push_str(RULE);
        report.push('\n');
        report.push_str(&format!(
            "{}: {}\n",
            self.localizer.gettext("Total tokens"),
            tokens.len()
        ));
        report
    }

    /// `Lexical analysis completed successfully. Found N tokens.`
    pub fn summary(&self, count: usize) -> String {
        let noun = self.localizer.ngettext("token", "tokens", count as u64);
        format!(
            "{}. {}.",
            self.localizer.gettext("Lexical analysis completed successfully"),
            format_message(
                &format!("{} %d {}", self.localizer.gettext("Found"), noun),
                &[&count]
            )
        )
    }

    /// The line printed to stderr when a run fails.
    pub fn describe_error(&self, err: &DriverError) -> String {
        match err {
            DriverError::Lexical(lexical) => format!(
                "{}: {}",
                self.localizer.gettext("Lexical Error"),
                lexical.localized(&self.localizer)
            ),
            DriverError::Open { path, .. } => format!(
                "{}: {}: {}",
                self.localizer.gettext("Error"),
                self.localizer.gettext("Cannot open file"),
                path.display()
            ),
            DriverError::NoSource => format!(
                "{}: {}",
                self.localizer.gettext("Error"),
                self.localizer.gettext("No source file specified")
            ),
            other => format!("{}: {}", self.localizer.gettext("Error"), other),
        }
    }
}
