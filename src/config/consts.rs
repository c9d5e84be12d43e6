/// Id reserved for the terminal collector node.
pub const COLLECTOR_ID: &str = "";
/// Separator between node id and port name in an input reference (`node_id.port`).
pub const PORT_SEPARATOR: char = '.';
/// Environment variable consulted for the log level when no CLI flag is given.
pub const LOG_ENV_VAR: &str = "TASKGRAPH_LOG";
/// Concurrency used when the platform cannot report available parallelism.
pub const DEFAULT_CONCURRENCY_FALLBACK: usize = 4;
