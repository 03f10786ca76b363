//! 错排生成
//!
//! 拒绝采样：均匀洗牌，没有不动点就接受，否则重试。接受的结果在所有错排中均匀分布。
//! 尝试次数用尽时，把最后一次洗牌的顺序首尾相连成一个环（`p[i] → p[i + 1]`），
//! 环构造一定是错排，因此 n ≥ 2 时永远不会失败。

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, warn};

use super::Assignment;
use crate::{AppError, AppResult};

/// 为参与者生成配对，结果按送礼人（参与者原顺序）排列
pub fn pair_up<R: Rng + ?Sized>(
    participants: &[String],
    rng: &mut R,
    max_attempts: u32,
) -> AppResult<Vec<Assignment>> {
    let targets = derangement(participants.len(), rng, max_attempts)?;

    Ok(participants
        .iter()
        .zip(targets)
        .map(|(giver, target)| Assignment {
            giver: giver.clone(),
            receiver: participants[target].clone(),
        })
        .collect())
}

/// 生成 `0..n` 的随机错排：返回 `perm`，满足 `perm[i] != i`
pub fn derangement<R: Rng + ?Sized>(
    n: usize,
    rng: &mut R,
    max_attempts: u32,
) -> AppResult<Vec<usize>> {
    if n < 2 {
        return Err(AppError::UnsatisfiableDraw { participants: n });
    }

    let mut perm: Vec<usize> = (0..n).collect();
    for attempt in 1..=max_attempts.max(1) {
        perm.shuffle(rng);
        if is_derangement(&perm) {
            debug!("Derangement of {} found after {} attempt(s)", n, attempt);
            return Ok(perm);
        }
    }

    warn!(
        "No derangement of {} after {} attempts, falling back to cycle construction",
        n, max_attempts
    );
    Ok(cycle_from_order(&perm))
}

fn is_derangement(perm: &[usize]) -> bool {
    perm.iter().enumerate().all(|(i, &p)| i != p)
}

/// 按给定顺序串成单环：`order[i]` 送给 `order[i + 1]`，最后一个送给第一个
fn cycle_from_order(order: &[usize]) -> Vec<usize> {
    let n = order.len();
    let mut perm = vec![0; n];
    for (i, &giver) in order.iter().enumerate() {
        perm[giver] = order[(i + 1) % n];
    }
    perm
}
