pub const VERSION: &str = "0.1.0";
pub const TOOL_NAME: &str = "heron";

pub const HERON_HOME_ENV: &str = "HERON_HOME";
pub const JAVA_HOME_ENV: &str = "JAVA_HOME";
pub const DEFAULT_HERON_DIR: &str = ".heron";
pub const DEFAULT_CONFIG_DIR: &str = "conf";
pub const DEFAULT_ENVIRON: &str = "default";
pub const DEFAULT_USER: &str = "heron";

pub const CLI_CONFIG_FILE: &str = "cli.yaml";
pub const RELEASE_FILE: &str = "release.yaml";
pub const OVERRIDE_FILE_PREFIX: &str = "override";
pub const OVERRIDE_FILE_SUFFIX: &str = ".yaml";

pub const RUNTIME_MANAGER_CLASS: &str = "com.twitter.heron.scheduler.RuntimeManagerMain";
pub const RUNTIME_MANAGER_JVM_OPTS: [&str; 2] = ["-client", "-Xmx1g"];
pub const LIB_SCHEDULER_DIR: &str = "lib/scheduler";
pub const LIB_STATEMGR_DIR: &str = "lib/statemgr";
pub const LIB_PACKING_DIR: &str = "lib/packing";

pub const API_TOPOLOGIES_ROUTE: &str = "/api/v1/topologies";
