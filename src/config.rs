use clap::Parser;


// The two project roots every snapshot covers, in output order
pub const SCAN_DIRS: [&str; 2] = ["include", "src"];
pub const DEFAULT_OUTPUT: &str = "project_summary.txt";

// Fixed pieces of the snapshot format
pub const MANIFEST_SEPARATOR: &str = "========================================";
pub const MANIFEST_TITLE: &str = "           文件路径汇总";
pub const NO_FILES_NOTICE: &str = "在 'include' 或 'src' 目录中未找到任何文件。";

#[derive(Parser)]
#[command(about = "Project Source Tree Snapshot Aggregator")]
pub struct Args {
    /// Output file for the combined snapshot
    #[arg(short = 'o', long, default_value = DEFAULT_OUTPUT)]
    pub output: String,
}
