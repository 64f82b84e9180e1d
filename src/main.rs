//! LK-Wahl 门户命令行主程序

use lk_portal::app::error::types::Result;
use lk_portal::app::logging::setup::init_logging;

fn main() -> Result<()> {
    // 初始化日志系统
    init_logging();

    // 运行命令行界面
    lk_portal::cli::run_cli()
}
