use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::Mutex;
use tracing::{debug, info};

use super::SessionSnapshot;
use crate::config::SessionConfig;
use crate::draw::{Assignment, DrawMethod, DrawResult};
use crate::reveal::{RevealCursor, RevealPhase};
use crate::roster::Roster;
use crate::{AppError, AppResult};

/// Tauri 托管状态
pub type SessionState = Mutex<SantaSession>;

/// 抽签会话
///
/// 显式持有全部会话状态，每个用户操作只有一个修改入口，
/// 新抽签与游标重置在 [`draw`](Self::draw) 内一起完成。
pub struct SantaSession {
    config: SessionConfig,
    roster: Roster,
    method: Option<DrawMethod>,
    result: Option<DrawResult>,
    cursor: RevealCursor,
    rng: StdRng,
}

impl SantaSession {
    pub fn new(config: SessionConfig) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        // 记录种子，便于复现某次抽签
        debug!("Session RNG seeded with {}", seed);

        Self {
            config,
            roster: Roster::new(),
            method: None,
            result: None,
            cursor: RevealCursor::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    // ============ 参与者 ============

    pub fn add_participant(&mut self, name: &str) -> AppResult<()> {
        let added = self.roster.add(name)?.to_string();
        info!("Participant added: {} (total {})", added, self.roster.len());
        Ok(())
    }

    pub fn remove_participant(&mut self, name: &str) -> AppResult<()> {
        let removed = self.roster.remove(name)?;
        info!("Participant removed: {} (total {})", removed, self.roster.len());
        Ok(())
    }

    pub fn participants(&self) -> &[String] {
        self.roster.names()
    }

    // ============ 抽签 ============

    pub fn select_method(&mut self, method: DrawMethod) {
        info!("Draw method selected: {}", method);
        self.method = Some(method);
    }

    pub fn selected_method(&self) -> Option<DrawMethod> {
        self.method
    }

    /// 已选择抽签方式且人数达到下限
    pub fn can_draw(&self) -> bool {
        self.method.is_some() && self.roster.len() >= self.config.min_participants
    }

    /// 执行抽签，替换上一次的结果并把揭晓游标归零
    pub fn draw(&mut self) -> AppResult<&DrawResult> {
        let method = self.method.ok_or(AppError::NoDrawMethod)?;
        if self.roster.len() < self.config.min_participants {
            return Err(AppError::NotEnoughParticipants {
                required: self.config.min_participants,
                found: self.roster.len(),
            });
        }

        let assignments =
            method.draw(self.roster.names(), &mut self.rng, self.config.max_draw_attempts)?;
        let result = DrawResult::new(method, assignments);
        info!(
            "Draw completed: id={}, method={}, pairs={}",
            result.id,
            method,
            result.len()
        );

        self.cursor.reset(result.len());
        Ok(self.result.insert(result))
    }

    pub fn result(&self) -> Option<&DrawResult> {
        self.result.as_ref()
    }

    // ============ 揭晓 ============

    /// 揭晓下一条配对，全部揭晓后返回 `None`
    pub fn reveal_next(&mut self) -> Option<&Assignment> {
        let index = self.cursor.advance()?;
        debug!("Revealed assignment {}/{}", index + 1, self.cursor.total());
        self.result.as_ref()?.assignments.get(index)
    }

    /// 一次揭晓剩余全部，返回本次新揭晓的配对
    pub fn reveal_all(&mut self) -> &[Assignment] {
        let before = self.cursor.revealed();
        self.cursor.advance_all();
        match &self.result {
            Some(result) => &result.assignments[before..self.cursor.revealed()],
            None => &[],
        }
    }

    pub fn phase(&self) -> RevealPhase {
        self.cursor.phase()
    }

    /// 已揭晓的配对（按抽签顺序）
    pub fn revealed(&self) -> &[Assignment] {
        match &self.result {
            Some(result) => &result.assignments[..self.cursor.revealed()],
            None => &[],
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            participants: self.roster.names().to_vec(),
            selected_method: self.method,
            can_draw: self.can_draw(),
            phase: self.phase(),
            draw_id: self.result.as_ref().map(|r| r.id),
            drawn_at: self.result.as_ref().map(|r| r.drawn_at),
            total: self.cursor.total(),
            revealed: self.revealed().to_vec(),
            latest_revealed: self.cursor.latest(),
        }
    }
}

impl Default for SantaSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
