//! # xtask - 开发辅助工具
//!
//! 提供本地质量门禁与内容辅助命令。
//!
//! ## 命令
//!
//! - `check-all`: 运行 fmt、clippy、test
//! - `export-blog`: 把博客目录导出为 JSON（与 `/api/blog` 输出一致）
//! - `preview-reveal`: 在终端按默认节奏逐帧播放解密动画

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};
use portfolio_core::blog::BlogPost;
use portfolio_core::{Logger, RevealAnimator, RevealDirection, RevealOptions};
use portfolio_host::{BlogStore, FsSource};
use xshell::{Shell, cmd};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "开发辅助工具")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 运行 fmt、clippy、test 门禁检查
    CheckAll,

    /// 导出博客文章为 JSON
    ExportBlog {
        /// 博客 markdown 目录
        #[arg(long, default_value = "content/blog")]
        content_dir: PathBuf,

        /// 输出文件（默认：public/blog.json）
        #[arg(short, long, default_value = "public/blog.json")]
        out: PathBuf,

        /// 自动摘要长度（字符数）
        #[arg(long, default_value_t = portfolio_core::blog::DEFAULT_EXCERPT_CHARS)]
        excerpt_chars: usize,
    },

    /// 逐帧打印解密动画
    PreviewReveal {
        /// 目标文本
        text: String,

        /// 揭示方向
        #[arg(short, long, value_enum, default_value_t = Direction::Center)]
        direction: Direction,

        /// 最大迭代次数
        #[arg(short, long, default_value_t = portfolio_core::reveal::DEFAULT_MAX_ITERATIONS)]
        max_iterations: u32,

        /// 随机种子
        #[arg(short, long, default_value_t = 0)]
        seed: u64,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Direction {
    Left,
    Right,
    Center,
}

impl From<Direction> for RevealDirection {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Left => RevealDirection::Left,
            Direction::Right => RevealDirection::Right,
            Direction::Center => RevealDirection::Center,
        }
    }
}

fn main() -> ExitCode {
    if let Err(e) = real_main() {
        eprintln!("xtask error: {e:#}");
        return ExitCode::from(1);
    }
    ExitCode::from(0)
}

fn real_main() -> anyhow::Result<()> {
    match Cli::parse().command {
        Commands::CheckAll => check_all(),
        Commands::ExportBlog {
            content_dir,
            out,
            excerpt_chars,
        } => {
            let posts = load_posts(&content_dir, excerpt_chars)?;
            write_posts(&posts, &out)?;
            eprintln!("==> 导出 {} 篇文章到 {}", posts.len(), out.display());
            Ok(())
        }
        Commands::PreviewReveal {
            text,
            direction,
            max_iterations,
            seed,
        } => {
            let speed = RevealOptions::default().speed;
            for frame in reveal_frames(&text, direction.into(), max_iterations, seed)? {
                println!("{frame}");
                std::thread::sleep(speed);
            }
            Ok(())
        }
    }
}

fn check_all() -> anyhow::Result<()> {
    let sh = Shell::new()?;

    eprintln!("\n==> cargo fmt --all -- --check");
    cmd!(sh, "cargo fmt --all -- --check").run()?;

    eprintln!("\n==> cargo clippy --workspace --all-targets");
    cmd!(sh, "cargo clippy --workspace --all-targets").run()?;

    eprintln!("\n==> cargo test --workspace");
    cmd!(sh, "cargo test --workspace").run()?;

    Ok(())
}

//=============================================================================
// export-blog 命令实现
//=============================================================================

/// 按接口规则加载文章
fn load_posts(content_dir: &Path, excerpt_chars: usize) -> anyhow::Result<Vec<BlogPost>> {
    if !content_dir.is_dir() {
        anyhow::bail!("博客目录不存在: {}", content_dir.display());
    }

    let store = BlogStore::new(
        Arc::new(FsSource::new(content_dir)),
        excerpt_chars,
        Logger::disabled(),
    );
    Ok(store.list()?)
}

fn write_posts(posts: &[BlogPost], out: &Path) -> anyhow::Result<()> {
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(posts)?;
    std::fs::write(out, json)?;
    Ok(())
}

//=============================================================================
// preview-reveal 命令实现
//=============================================================================

/// 生成从激活到揭示完成的每一帧
fn reveal_frames(
    text: &str,
    direction: RevealDirection,
    max_iterations: u32,
    seed: u64,
) -> anyhow::Result<Vec<String>> {
    let options = RevealOptions::default()
        .with_direction(direction)
        .with_max_iterations(max_iterations);
    let mut anim = RevealAnimator::seeded(text, options, seed, Logger::disabled())?;

    let mut frames = vec![anim.displayed().to_string()];
    if anim.activate() {
        while anim.tick() {
            frames.push(anim.displayed().to_string());
        }
        frames.push(anim.displayed().to_string());
    }
    Ok(frames)
}
