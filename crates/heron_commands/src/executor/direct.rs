use crate::executor::{ExecutionResult, Executor, Status};
use crate::helper::TopologyArgs;
use actix_web::rt::System;
use anyhow::Result;
use heron_config::definitions::{
    OVERRIDE_FILE_PREFIX, OVERRIDE_FILE_SUFFIX, RUNTIME_MANAGER_CLASS, RUNTIME_MANAGER_JVM_OPTS,
};
use heron_config::{HeronCliConfig, HeronConfig};
use heron_utils::process;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Runs requests by launching the runtime manager on the local machine.
pub struct DirectRunner {
    config: HeronConfig,
    cli: HeronCliConfig,
}

impl DirectRunner {
    pub fn new(config: HeronConfig, cli: HeronCliConfig) -> Self {
        Self { config, cli }
    }

    fn classpath(&self) -> String {
        self.config
            .lib_jars()
            .iter()
            .map(|jar| jar.display().to_string())
            .collect::<Vec<String>>()
            .join(":")
    }

    /// The program and arguments used to launch the runtime manager. The
    /// extra arguments follow the common ones in the order they were given.
    pub fn invocation(
        &self,
        command: &str,
        args: &TopologyArgs,
        extra_args: &[String],
        override_file: &Path,
    ) -> (PathBuf, Vec<String>) {
        let mut jvm_args: Vec<String> = RUNTIME_MANAGER_JVM_OPTS
            .iter()
            .map(|opt| opt.to_string())
            .collect();
        jvm_args.push("-cp".to_owned());
        jvm_args.push(self.classpath());
        jvm_args.push(RUNTIME_MANAGER_CLASS.to_owned());

        let common = [
            ("--cluster", args.cluster.clone()),
            ("--role", args.role.clone()),
            ("--environment", args.environ.clone()),
            ("--submit_user", args.submit_user.clone()),
            ("--heron_home", self.config.heron_home.display().to_string()),
            ("--config_path", self.config.config_path.display().to_string()),
            ("--override_config_file", override_file.display().to_string()),
            ("--release_file", self.config.release_file().display().to_string()),
            ("--topology_name", args.topology_name.clone()),
            ("--command", command.to_owned()),
        ];
        for (key, value) in common {
            jvm_args.push(key.to_owned());
            jvm_args.push(value);
        }

        jvm_args.extend(extra_args.iter().cloned());
        if args.verbose {
            jvm_args.push("--verbose".to_owned());
        }

        (self.config.java(&self.cli), jvm_args)
    }

    fn override_config(&self, args: &TopologyArgs) -> Result<NamedTempFile> {
        let properties: BTreeMap<&str, &str> = args
            .config_properties
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
            .collect();

        let mut file = tempfile::Builder::new()
            .prefix(OVERRIDE_FILE_PREFIX)
            .suffix(OVERRIDE_FILE_SUFFIX)
            .tempfile()?;
        if !properties.is_empty() {
            file.write_all(serde_yaml_ng::to_string(&properties)?.as_bytes())?;
        }
        debug!("override config written to {}", file.path().display());
        Ok(file)
    }
}

impl Executor for DirectRunner {
    fn run(
        &self,
        command: &str,
        args: &TopologyArgs,
        action: &str,
        extra_args: &[String],
    ) -> Result<ExecutionResult> {
        let override_file = self.override_config(args)?;
        let (program, program_args) =
            self.invocation(command, args, extra_args, override_file.path());

        let output = System::new().block_on(process::run(&program, &program_args))?;

        if output.success() {
            let detail = Some(output.stdout).filter(|s| !s.trim().is_empty());
            Ok(ExecutionResult::success(action, &args.topology_name, detail))
        } else {
            let detail = Some(output.stderr).filter(|s| !s.trim().is_empty());
            Ok(ExecutionResult::failure(
                Status::HeronError,
                action,
                &args.topology_name,
                detail,
            ))
        }
    }
}
