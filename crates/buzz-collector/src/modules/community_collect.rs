//! 커뮤니티 데이터 수집 모듈.

use crate::{CollectionStats, CollectorConfig, Result};
use std::time::Instant;

use buzz_core::{CollectionResult, PostRecord};
use buzz_data::CommunitySource;

/// 트렌딩 심볼과 심볼별 최근 게시글 수집
///
/// 트렌딩 심볼 조회가 실패하거나 심볼이 없으면 빈 결과를 반환합니다
/// (에러 아님). 심볼 단위 게시글 조회 실패는 해당 심볼에 국한되며
/// 루프는 다음 심볼로 계속 진행합니다. 심볼 한 건을 처리할 때마다
/// 설정된 딜레이만큼 대기하여 요청 속도를 제한합니다.
pub async fn collect_community_data(
    source: &dyn CommunitySource,
    config: &CollectorConfig,
) -> Result<(CollectionResult, CollectionStats)> {
    let start = Instant::now();
    let mut stats = CollectionStats::new();

    tracing::info!(source = source.name(), "커뮤니티 데이터 수집 시작");

    // 1. 트렌딩 심볼 조회
    let trending = match source
        .get_trending_symbols(config.collect.num_symbols)
        .await
    {
        Ok(symbols) => symbols,
        Err(e) => {
            stats.errors += 1;
            stats.elapsed = start.elapsed();
            tracing::error!(error = %e, "트렌딩 심볼 조회 실패");
            return Ok((CollectionResult::empty(), stats));
        }
    };

    if trending.is_empty() {
        stats.elapsed = start.elapsed();
        tracing::warn!("트렌딩 심볼이 없습니다");
        return Ok((CollectionResult::empty(), stats));
    }

    tracing::info!(count = trending.len(), "트렌딩 심볼 조회 완료");

    // 2. 심볼별 게시글 수집
    let total = trending.len();
    let mut messages = Vec::new();

    for (idx, trending_symbol) in trending.iter().enumerate() {
        let ticker = trending_symbol.symbol.as_str();
        if ticker.is_empty() {
            continue;
        }

        stats.total += 1;

        tracing::debug!(
            symbol = ticker,
            progress = format!("{}/{}", idx + 1, total),
            "게시글 수집 시작"
        );

        match source
            .get_recent_posts(ticker, config.collect.posts_per_symbol)
            .await
        {
            Ok(posts) if !posts.is_empty() => {
                let mut appended = 0;
                for post in posts {
                    // 본문 없는 게시글은 제외
                    if post.body.is_empty() {
                        continue;
                    }
                    messages.push(PostRecord::new(
                        ticker,
                        post.body,
                        post.created_at.unwrap_or_default(),
                    ));
                    appended += 1;
                }

                stats.success += 1;
                stats.total_posts += appended;
                tracing::debug!(symbol = ticker, posts = appended, "게시글 수집 완료");
            }
            Ok(_) => {
                stats.empty += 1;
                tracing::debug!(symbol = ticker, "게시글 없음");
            }
            Err(e) => {
                stats.errors += 1;
                tracing::warn!(symbol = ticker, error = %e, "게시글 조회 실패");
            }
        }

        // Rate limiting
        tokio::time::sleep(config.collect.request_delay()).await;
    }

    let result = CollectionResult::new(trending, messages);
    stats.elapsed = start.elapsed();

    tracing::info!(
        symbols = result.symbols.len(),
        messages = result.messages.len(),
        "커뮤니티 데이터 수집 완료"
    );

    Ok((result, stats))
}
