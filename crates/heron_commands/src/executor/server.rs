use crate::executor::{ExecutionResult, Executor, Status};
use crate::helper::TopologyArgs;
use actix_web::rt::System;
use anyhow::Result;
use heron_config::definitions::API_TOPOLOGIES_ROUTE;
use heron_http::Request;
use tracing::{debug, error};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Post,
    Delete,
}

/// Runs requests through the heron API server.
pub struct ServerRunner {
    service_url: String,
}

impl ServerRunner {
    pub fn new(service_url: String) -> Self {
        Self { service_url }
    }

    pub fn route(&self, command: &str, args: &TopologyArgs) -> Option<(Method, String)> {
        let base = format!(
            "{}{API_TOPOLOGIES_ROUTE}/{}/{}",
            self.service_url.trim_end_matches('/'),
            args.cluster_role_env(),
            args.topology_name
        );
        match command {
            "kill" => Some((Method::Delete, base)),
            "activate" | "deactivate" | "restart" => {
                Some((Method::Post, format!("{base}/{command}")))
            }
            _ => None,
        }
    }

    /// Turns extra arguments into query parameters. `--flag value` becomes
    /// `flag=value` and a bare `--flag` becomes `flag=true`.
    pub fn params(args: &TopologyArgs, extra_args: &[String]) -> Vec<(String, String)> {
        let mut params = vec![("user".to_owned(), args.submit_user.clone())];
        let mut tokens = extra_args.iter().peekable();
        while let Some(token) = tokens.next() {
            let Some(key) = token.strip_prefix("--") else {
                debug!("ignoring stray extra argument {token}");
                continue;
            };
            let value = tokens
                .next_if(|next| !next.starts_with("--"))
                .cloned()
                .unwrap_or_else(|| "true".to_owned());
            params.push((key.to_owned(), value));
        }
        params
    }
}

impl Executor for ServerRunner {
    fn run(
        &self,
        command: &str,
        args: &TopologyArgs,
        action: &str,
        extra_args: &[String],
    ) -> Result<ExecutionResult> {
        let Some((method, url)) = self.route(command, args) else {
            return Ok(ExecutionResult::failure(
                Status::InvocationError,
                action,
                &args.topology_name,
                Some(format!("{command} is not supported by the API server")),
            ));
        };

        let params = Self::params(args, extra_args);
        let request = match method {
            Method::Post => Request::post(&url),
            Method::Delete => Request::delete(&url),
        }
        .header("Accept", "application/json")
        .query(&params)?;

        System::new().block_on(async move {
            match request.text().await {
                Ok(body) => {
                    let detail = Some(body).filter(|s| !s.trim().is_empty());
                    Ok(ExecutionResult::success(action, &args.topology_name, detail))
                }
                Err(e) => {
                    error!("request to {url} failed: {e}");
                    Ok(ExecutionResult::failure(
                        Status::HeronError,
                        action,
                        &args.topology_name,
                        Some(e.to_string()),
                    ))
                }
            }
        })
    }
}
