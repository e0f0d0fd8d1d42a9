use miette::Diagnostic;
use thiserror::Error;

/// The remote call an error originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    QuickScan,
    FullAnalysis,
    RiskAssessment,
}

impl Operation {
    /// Message shown when the server fails without saying why.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Operation::QuickScan => "Quick scan failed",
            Operation::FullAnalysis => "Analysis failed",
            Operation::RiskAssessment => "Risk assessment failed",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Operation::QuickScan => "quick scan",
            Operation::FullAnalysis => "full analysis",
            Operation::RiskAssessment => "risk assessment",
        };

        write!(f, "{label}")
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Please enter a website URL")]
    #[diagnostic(
        code(adacheck::validation),
        help("pass the address of the page to audit, e.g. https://example.com")
    )]
    EmptyUrl,

    #[error("{message}")]
    #[diagnostic(code(adacheck::application))]
    Application {
        operation: Operation,
        status: Option<u16>,
        message: String,
    },

    #[error("Network error: unable to reach the compliance service ({reason})")]
    #[diagnostic(
        code(adacheck::transport),
        help("check the service address with --base-url or in adacheck.toml")
    )]
    Transport { operation: Operation, reason: String },

    #[error("No analysis available. Run an analysis first.")]
    #[diagnostic(
        code(adacheck::missing_analysis),
        help("run `adacheck analyze <URL> --report` or use `--save-json` and `adacheck report --from`")
    )]
    MissingAnalysis,

    #[error("invalid configuration: {0}")]
    #[diagnostic(code(adacheck::config))]
    Config(String),

    #[error(transparent)]
    #[diagnostic(code(adacheck::io))]
    Io(#[from] std::io::Error),

    #[error("failed to render template")]
    #[diagnostic(code(adacheck::template))]
    Template(#[from] askama::Error),

    #[error("failed to encode JSON")]
    #[diagnostic(code(adacheck::json))]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn transport(operation: Operation, reason: impl std::fmt::Display) -> Self {
        Error::Transport {
            operation,
            reason: reason.to_string(),
        }
    }

    /// Operation that failed, for errors raised by a remote call.
    pub fn operation(&self) -> Option<Operation> {
        match self {
            Error::Application { operation, .. } | Error::Transport { operation, .. } => {
                Some(*operation)
            }
            _ => None,
        }
    }

    /// Whether the error belongs in the results page error area rather than a blocking prompt.
    pub fn is_remote(&self) -> bool {
        self.operation().is_some()
    }
}

pub type Result<T> = std::result::Result<T, Error>;
