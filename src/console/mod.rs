//! 终端前端
//!
//! 命令行参数 + 逐行交互，只负责解析输入和输出文本，
//! 所有状态变化委托给 [`SantaSession`]。

mod command;
pub mod render;

pub use command::{ConsoleCommand, HELP};

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{error, warn};

use crate::config::SessionConfig;
use crate::draw::{list_methods, DrawMethod};
use crate::reveal::RevealPhase;
use crate::session::SantaSession;
use crate::AppResult;

const PROMPT: &[u8] = b"> ";

#[derive(Debug, Parser)]
#[command(name = "secret-santa", version, about = "Draw Secret Santa pairings and reveal them one by one")]
pub struct Args {
    /// 启动时加入的参与者
    pub participants: Vec<String>,

    /// JSON 配置文件（未指定时读取 SECRET_SANTA_CONFIG）
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 固定随机种子，用于复现抽签
    #[arg(long)]
    pub seed: Option<u64>,

    /// 允许抽签的最少人数
    #[arg(long)]
    pub min_participants: Option<usize>,

    /// 预先选择的抽签方式
    #[arg(short, long)]
    pub method: Option<DrawMethod>,

    /// 非交互模式：直接抽签并输出全部配对
    #[arg(long)]
    pub draw: bool,

    /// 以 JSON 输出会话快照
    #[arg(long)]
    pub json: bool,
}

impl Args {
    /// 默认值 → 配置文件 → 命令行覆盖
    pub fn session_config(&self) -> AppResult<SessionConfig> {
        let mut config = SessionConfig::resolve(self.config.as_deref())?;
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(min) = self.min_participants {
            config.min_participants = min;
        }
        config.validate()?;
        Ok(config)
    }
}

pub fn run() -> ExitCode {
    let args = Args::parse();
    crate::init_tracing();

    // stdin/stdout 走阻塞线程池，不需要 IO driver
    let runtime = match tokio::runtime::Builder::new_current_thread().build() {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("Failed to start runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(start(args)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn start(args: Args) -> AppResult<()> {
    let config = args.session_config()?;
    let mut session = SantaSession::new(config);
    for name in &args.participants {
        session.add_participant(name)?;
    }
    if let Some(method) = args.method {
        session.select_method(method);
    }

    let mut console = Console::new(session, args.json);
    let mut stdout = tokio::io::stdout();
    if args.draw {
        console.draw_and_reveal_all(&mut stdout).await
    } else {
        let stdin = BufReader::new(tokio::io::stdin());
        console.repl(stdin, &mut stdout).await
    }
}

pub struct Console {
    session: SantaSession,
    json: bool,
}

impl Console {
    pub fn new(session: SantaSession, json: bool) -> Self {
        Self { session, json }
    }

    pub fn session(&self) -> &SantaSession {
        &self.session
    }

    /// 逐行读取命令直到 `quit` 或输入结束，单条命令出错不会中断会话
    pub async fn repl<R, W>(&mut self, reader: R, writer: &mut W) -> AppResult<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        if !self.json {
            writer
                .write_all(b"Secret Santa. Type `help` for commands.\n")
                .await?;
        }

        let mut lines = reader.lines();
        loop {
            // JSON 模式下 stdout 每行都必须是合法 JSON，不输出提示符
            if !self.json {
                writer.write_all(PROMPT).await?;
                writer.flush().await?;
            }

            let Some(line) = lines.next_line().await? else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            let output = match line.parse::<ConsoleCommand>() {
                Ok(ConsoleCommand::Quit) => break,
                Ok(command) => self.execute(command),
                Err(e) => Err(e),
            };

            match output {
                Ok(text) => writer.write_all(text.as_bytes()).await?,
                Err(e) => {
                    warn!("Command failed: {}", e);
                    let line = if self.json {
                        format!("{}\n", serde_json::to_string(&e)?)
                    } else {
                        format!("error: {e}\n")
                    };
                    writer.write_all(line.as_bytes()).await?;
                }
            }
        }

        writer.flush().await?;
        Ok(())
    }

    /// `--draw` 模式：抽签、全部揭晓、输出
    pub async fn draw_and_reveal_all<W>(&mut self, writer: &mut W) -> AppResult<()>
    where
        W: AsyncWrite + Unpin,
    {
        self.session.draw()?;
        self.session.reveal_all();

        let text = if self.json {
            self.snapshot_json()?
        } else {
            self.session
                .revealed()
                .iter()
                .enumerate()
                .map(|(index, item)| render::assignment(index, item, false))
                .collect()
        };
        writer.write_all(text.as_bytes()).await?;
        writer.flush().await?;
        Ok(())
    }

    /// 执行一条命令，返回要输出的文本
    pub fn execute(&mut self, command: ConsoleCommand) -> AppResult<String> {
        let text = match command {
            ConsoleCommand::Add(name) => {
                self.session.add_participant(&name)?;
                render::participants(self.session.participants())
            }
            ConsoleCommand::Remove(name) => {
                self.session.remove_participant(&name)?;
                render::participants(self.session.participants())
            }
            ConsoleCommand::List => render::participants(self.session.participants()),
            ConsoleCommand::Methods => {
                let methods = list_methods();
                if self.json {
                    return Ok(format!("{}\n", serde_json::to_string(&methods)?));
                }
                render::methods(&methods)
            }
            ConsoleCommand::Method(key) => {
                let method: DrawMethod = key.parse()?;
                self.session.select_method(method);
                format!("Draw method: {}\n", method.key())
            }
            ConsoleCommand::Draw => {
                let total = self.session.draw()?.len();
                format!(
                    "Drew {total} pairings. {}\n",
                    render::phase_hint(self.session.phase())
                )
            }
            ConsoleCommand::Reveal => self.reveal_next(),
            ConsoleCommand::RevealAll => {
                let start = self.session.revealed().len();
                let mut out: String = self
                    .session
                    .reveal_all()
                    .iter()
                    .enumerate()
                    .map(|(offset, item)| render::assignment(start + offset, item, false))
                    .collect();
                out.push_str(render::phase_hint(self.session.phase()));
                out.push('\n');
                out
            }
            ConsoleCommand::Status => render::status(&self.session.snapshot()),
            ConsoleCommand::Help => {
                if self.json {
                    return Ok(format!("{}\n", serde_json::to_string(HELP)?));
                }
                return Ok(HELP.to_string());
            }
            ConsoleCommand::Quit => String::new(),
        };

        if self.json {
            return self.snapshot_json();
        }
        Ok(text)
    }

    fn reveal_next(&mut self) -> String {
        let index = self.session.revealed().len();
        let line = self
            .session
            .reveal_next()
            .map(|item| render::assignment(index, item, true));

        match (line, self.session.phase()) {
            (None, RevealPhase::Idle) => "Nothing to reveal yet, run `draw` first.\n".to_string(),
            (line, RevealPhase::Complete) => format!(
                "{}{}\n",
                line.unwrap_or_default(),
                render::phase_hint(RevealPhase::Complete)
            ),
            (line, _) => line.unwrap_or_default(),
        }
    }

    fn snapshot_json(&self) -> AppResult<String> {
        Ok(format!(
            "{}\n",
            serde_json::to_string(&self.session.snapshot())?
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AppError;

    fn console(json: bool) -> Console {
        let session = SantaSession::new(SessionConfig {
            seed: Some(2024),
            ..SessionConfig::default()
        });
        Console::new(session, json)
    }

    async fn run_script(console: &mut Console, script: &str) -> String {
        let mut out = Vec::new();
        console.repl(script.as_bytes(), &mut out).await.unwrap();
        String::from_utf8(out).unwrap()
    }

    #[tokio::test]
    async fn test_repl_full_flow() {
        let mut console = console(false);
        let script = "add Ali\nadd Zeynep\nadd Mehmet\nmethod classic\ndraw\nreveal\nreveal\nreveal\nreveal\nquit\nadd Ignored\n";
        let out = run_script(&mut console, script).await;

        assert!(out.contains("Participants (3)"));
        assert!(out.contains("Draw method: classic"));
        assert!(out.contains("Drew 3 pairings."));
        assert!(out.contains("   1. Ali -> "));
        assert!(out.contains("   3. Mehmet -> "));
        assert!(out.contains("All pairings revealed!"));
        assert_eq!(console.session().phase(), RevealPhase::Complete);
        // quit 之后的输入不再处理
        assert_eq!(console.session().participants().len(), 3);
    }

    #[tokio::test]
    async fn test_repl_reports_errors_and_continues() {
        let mut console = console(false);
        let out = run_script(&mut console, "add Ali\nadd  Ali \ndraw\nbogus\nremove Veli\nlist\n").await;

        assert!(out.contains("error: Participant already added: Ali"));
        assert!(out.contains("error: No draw method selected"));
        assert!(out.contains("error: Invalid command: unknown command `bogus`"));
        assert!(out.contains("error: Participant not found: Veli"));
        assert!(out.contains("Participants (1)"));
    }

    #[tokio::test]
    async fn test_json_mode_every_line_is_json() {
        let mut console = console(true);
        let script = "add A\nadd A\nadd B\nadd C\nbogus\nmethods\nmethod classic\ndraw\nreveal\nhelp\nstatus\n";
        let out = run_script(&mut console, script).await;

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 11);
        for line in &lines {
            assert!(
                serde_json::from_str::<serde_json::Value>(line).is_ok(),
                "not JSON: {line}"
            );
        }

        let duplicate: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(duplicate["kind"], "DuplicateParticipant");
        let unknown: serde_json::Value = serde_json::from_str(lines[4]).unwrap();
        assert_eq!(unknown["kind"], "InvalidCommand");
        let status: serde_json::Value = serde_json::from_str(lines[10]).unwrap();
        assert_eq!(status["phase"], "revealing");
        assert_eq!(status["revealed"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_reveal_before_draw() {
        let mut console = console(false);
        let out = run_script(&mut console, "reveal\n").await;
        assert!(out.contains("Nothing to reveal yet"));
    }

    #[tokio::test]
    async fn test_draw_and_reveal_all_json() {
        let mut session = SantaSession::new(SessionConfig {
            seed: Some(1),
            ..SessionConfig::default()
        });
        for name in ["A", "B", "C", "D"] {
            session.add_participant(name).unwrap();
        }
        session.select_method(DrawMethod::Classic);
        let mut console = Console::new(session, true);

        let mut out = Vec::new();
        console.draw_and_reveal_all(&mut out).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["phase"], "complete");
        assert_eq!(value["total"], 4);
        assert_eq!(value["revealed"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_draw_mode_requires_method() {
        let mut console = console(false);
        let mut out = Vec::new();
        let result = console.draw_and_reveal_all(&mut out).await;
        assert!(matches!(result, Err(AppError::NoDrawMethod)));
        assert!(out.is_empty());
    }

    #[test]
    fn test_execute_reveal_all_numbers_continue() {
        let mut console = console(false);
        for name in ["A", "B", "C"] {
            console.execute(ConsoleCommand::Add(name.into())).unwrap();
        }
        console
            .execute(ConsoleCommand::Method("classic".into()))
            .unwrap();
        console.execute(ConsoleCommand::Draw).unwrap();
        console.execute(ConsoleCommand::Reveal).unwrap();

        let out = console.execute(ConsoleCommand::RevealAll).unwrap();
        assert!(out.contains("   2. B -> "));
        assert!(out.contains("   3. C -> "));
        assert!(!out.contains("   1. "));
    }

    #[test]
    fn test_args_override_config() {
        let args = Args::parse_from([
            "secret-santa",
            "--seed",
            "9",
            "--min-participants",
            "4",
            "--method",
            "classic",
            "Ali",
            "Zeynep",
        ]);
        assert_eq!(args.participants, ["Ali", "Zeynep"]);
        assert_eq!(args.method, Some(DrawMethod::Classic));

        let config = args.session_config().unwrap();
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.min_participants, 4);
    }

    #[test]
    fn test_args_reject_invalid_minimum() {
        let args = Args::parse_from(["secret-santa", "--min-participants", "1"]);
        assert!(matches!(args.session_config(), Err(AppError::Config(_))));
    }
}
