use std::fmt::{Display, Formatter};

/// How a request reaches the cluster: by launching the runtime manager
/// locally or through the heron API server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployMode {
    Direct,
    Server { service_url: String },
}

impl Display for DeployMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Direct => write!(f, "direct"),
            Self::Server { service_url } => write!(f, "server ({service_url})"),
        }
    }
}
