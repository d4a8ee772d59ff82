//! ETF 52주 저점 스크리너 CLI.

use anyhow::Context;
use clap::{Parser, Subcommand};
use etf_core::{init_logging, LogConfig};
use etf_data::SheetSource;
use etf_notification::TelegramSender;
use etf_runner::{run_job, run_scheduler, RunnerConfig};

#[derive(Parser)]
#[command(name = "etf-runner")]
#[command(about = "ETF 52W Low Screener", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// 로그 레벨 (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// 데몬 모드: 예약된 시각마다 작업 실행 (기본값)
    Daemon,

    /// 작업을 즉시 한 번 실행
    Once {
        /// 건너뛸 요일이어도 실행
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();

    init_logging(LogConfig::new(cli.log_level.as_str()).with_env_format())
        .map_err(|e| anyhow::anyhow!("로깅 초기화 실패: {e}"))?;

    let config = RunnerConfig::from_env().context("설정 로드 실패")?;
    config.log_banner();

    let source = SheetSource::new(config.sheet.url.as_str(), config.sheet.timeout())
        .context("시트 소스 생성 실패")?;
    let notifier =
        TelegramSender::new(config.telegram_config()).context("텔레그램 클라이언트 생성 실패")?;

    match cli.command.unwrap_or(Commands::Daemon) {
        Commands::Daemon => {
            let shutdown = async {
                if let Err(e) = tokio::signal::ctrl_c().await {
                    tracing::error!(error = %e, "종료 신호 대기 실패");
                    std::future::pending::<()>().await;
                }
            };
            run_scheduler(&config, &source, &notifier, shutdown).await;
        }
        Commands::Once { force } => {
            let now = config.schedule.clock().now();
            let mut stdout = std::io::stdout();
            let outcome = run_job(&config, &source, &notifier, now, force, &mut stdout).await;
            if outcome.is_failed() {
                std::process::exit(1);
            }
        }
    }

    tracing::info!("ETF Auto Runner 종료");
    Ok(())
}
