use crate::executor::{ExecutionResult, Executor};
use crate::helper::TopologyArgs;
use anyhow::Result;
use std::cell::RefCell;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recorded {
    pub command: String,
    pub args: TopologyArgs,
    pub action: String,
    pub extra_args: Vec<String>,
}

/// Records every request instead of contacting a cluster.
#[derive(Debug, Default)]
pub struct RecordingExecutor {
    pub requests: RefCell<Vec<Recorded>>,
}

impl RecordingExecutor {
    pub fn last(&self) -> Recorded {
        self.requests
            .borrow()
            .last()
            .cloned()
            .expect("no request was recorded")
    }
}

impl Executor for RecordingExecutor {
    fn run(
        &self,
        command: &str,
        args: &TopologyArgs,
        action: &str,
        extra_args: &[String],
    ) -> Result<ExecutionResult> {
        self.requests.borrow_mut().push(Recorded {
            command: command.to_owned(),
            args: args.clone(),
            action: action.to_owned(),
            extra_args: extra_args.to_vec(),
        });
        Ok(ExecutionResult::success(action, &args.topology_name, None))
    }
}
