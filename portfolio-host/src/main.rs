//! Portfolio Host - HTTP 服务入口
//!
//! ```bash
//! cargo run -p portfolio-host
//! cargo run -p portfolio-host -- --bind 0.0.0.0:8080 --content-dir content/blog
//! cargo run -p portfolio-host -- --init-config
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use portfolio_host::{AppConfig, ConfigOverrides, logging, serve};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "portfolio-host")]
#[command(about = "作品集站点服务 - 博客接口与静态文件")]
#[command(version)]
struct Cli {
    /// 配置文件（默认：config.json）
    #[arg(short, long, default_value = "config.json")]
    config: PathBuf,

    /// 监听地址（覆盖配置文件）
    #[arg(short, long)]
    bind: Option<String>,

    /// 博客 markdown 目录（覆盖配置文件）
    #[arg(long)]
    content_dir: Option<PathBuf>,

    /// 静态文件目录（覆盖配置文件）
    #[arg(long)]
    static_dir: Option<PathBuf>,

    /// 日志级别（覆盖配置文件）
    #[arg(short, long)]
    log_level: Option<String>,

    /// 把合并后的配置写入 `--config` 指定的文件后退出
    #[arg(long)]
    init_config: bool,
}

fn main() -> ExitCode {
    if let Err(e) = real_main() {
        eprintln!("❌ 启动失败: {e:#}");
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn real_main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(&cli.config).with_overrides(ConfigOverrides {
        bind_addr: cli.bind,
        content_dir: cli.content_dir,
        static_dir: cli.static_dir,
        log_level: cli.log_level,
    });
    config.validate()?;

    if cli.init_config {
        config.save(&cli.config)?;
        println!("✅ 配置已写入: {:?}", cli.config);
        return Ok(());
    }

    logging::init(config.level()?).map_err(|e| anyhow::anyhow!(e))?;
    let logger = logging::root_logger();
    info!(parent: logger.span(), version = env!("CARGO_PKG_VERSION"), "配置加载完成");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        if let Err(e) = serve(&config, logger.clone()).await {
            error!(parent: logger.span(), error = %e, "服务异常退出");
            return Err(e);
        }
        Ok(())
    })?;

    Ok(())
}
