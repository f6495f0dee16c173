//! Standalone community data collector CLI.

use clap::{Parser, Subcommand};

use buzz_collector::{modules, CollectorConfig};
use buzz_core::logging::{init_logging, LogConfig, LogFormat};
use buzz_data::{CommunitySource, StockTwitsClient};

#[derive(Parser)]
#[command(name = "buzz-collector")]
#[command(about = "BuzzTrack Community Data Collector", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// 로그 레벨 (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// 로그 형식 (pretty, json, compact)
    #[arg(long, default_value = "pretty")]
    log_format: LogFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// 트렌딩 심볼 조회
    Trending {
        /// 조회할 심볼 수 (기본: 설정값)
        #[arg(long)]
        limit: Option<usize>,
    },

    /// 커뮤니티 게시글 수집
    Collect,

    /// 전체 워크플로우 실행 (수집 → 언급 순위)
    RunAll,

    /// 데몬 모드: 주기적으로 전체 워크플로우 실행
    Daemon,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // 로깅 초기화
    let log_config = LogConfig::new(format!("buzz_collector={}", cli.log_level))
        .with_format(cli.log_format);
    init_logging(&log_config)?;

    tracing::info!("BuzzTrack Data Collector 시작");

    // 설정 로드
    let config = CollectorConfig::from_env()?;
    tracing::debug!(
        num_symbols = config.collect.num_symbols,
        posts_per_symbol = config.collect.posts_per_symbol,
        "설정 로드 완료"
    );

    let source = StockTwitsClient::with_timeout(config.collect.request_timeout());

    // 명령 실행
    match cli.command {
        Commands::Trending { limit } => {
            let limit = limit.unwrap_or(config.collect.num_symbols);
            let symbols = source.get_trending_symbols(limit).await?;

            if symbols.is_empty() {
                tracing::warn!("트렌딩 심볼이 없습니다");
            }
            for (idx, symbol) in symbols.iter().enumerate() {
                tracing::info!(
                    rank = idx + 1,
                    symbol = %symbol.symbol,
                    title = symbol.title.as_deref().unwrap_or("-"),
                    "트렌딩 심볼"
                );
            }
        }
        Commands::Collect => {
            let (result, stats) = modules::collect_community_data(&source, &config).await?;
            stats.log_summary("커뮤니티 수집");
            tracing::info!(messages = result.messages.len(), "수집된 게시글");
        }
        Commands::RunAll => {
            run_workflow(&source, &config).await?;
        }
        Commands::Daemon => {
            tracing::info!(
                "=== 데몬 모드 시작 (주기: {}분) ===",
                config.daemon.interval_minutes
            );

            let mut interval = tokio::time::interval(config.daemon.interval());
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {
                        tracing::info!("종료 신호 수신, 데몬 종료 중...");
                        break;
                    }
                    _ = interval.tick() => {
                        if let Err(e) = run_workflow(&source, &config).await {
                            tracing::error!("워크플로우 실패: {}", e);
                        }
                        tracing::info!(
                            "=== 워크플로우 완료, 다음 실행: {}분 후 ===",
                            config.daemon.interval_minutes
                        );
                    }
                }
            }
        }
    }

    tracing::info!("BuzzTrack Data Collector 종료");

    Ok(())
}

/// 전체 워크플로우 실행 (수집 → 언급 순위)
async fn run_workflow(
    source: &dyn CommunitySource,
    config: &CollectorConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("=== 전체 워크플로우 시작 ===");

    // 1. 커뮤니티 데이터 수집
    tracing::info!("Step 1/2: 커뮤니티 수집");
    let (result, stats) = modules::collect_community_data(source, config).await?;
    stats.log_summary("커뮤니티 수집");

    // 2. 언급 순위 산출
    tracing::info!("Step 2/2: 언급 순위 산출");
    let (ranked, statistics) = modules::rank_mentions(&result, config);
    modules::log_ranking(&ranked, &statistics);

    tracing::info!("=== 전체 워크플로우 완료 ===");
    Ok(())
}
