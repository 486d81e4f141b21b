use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{self, Config, ConfigError, LoggingConfig, DEFAULT_CONFIG_PATH};
use crate::error::CalcError;
use crate::{labs, web};

/// 전력 공학 계산기 웹 서버.
#[derive(Debug, Parser)]
#[command(name = "power_engineering_labs", version)]
#[command(about = "Single-page power engineering calculators served over HTTP")]
pub struct Cli {
    /// 설정 파일 경로
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// 설정의 server.port 대신 사용할 포트
    #[arg(short, long)]
    pub port: Option<u16>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// HTTP 서버 실행 (기본)
    Serve,
    /// 기본 설정 파일 생성
    InitConfig,
    /// 계산기 목록 출력
    Labs,
    /// JSON 입력으로 계산기 하나를 실행하고 결과를 JSON으로 출력
    Calc {
        slug: String,
        /// 입력 JSON 파일. 없으면 표준 입력을 읽는다.
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("calculation error: {0}")]
    Calc(#[from] CalcError),
    #[error("unknown calculator: {0}")]
    UnknownLab(String),
    #[error("config file already exists: {0}")]
    ConfigExists(PathBuf),
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}

/// 로그 출력을 초기화한다. 출력은 stderr로 보내 `calc` 결과와 섞이지 않게 한다.
pub fn init_logging(cfg: &LoggingConfig) -> Result<(), AppError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.filter));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);
    let result = if cfg.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result.map_err(|e| AppError::Logging(e.to_string()))
}

/// CLI 명령을 실행한다.
pub fn run(cli: Cli) -> Result<(), AppError> {
    let command = cli.command.unwrap_or(Command::Serve);
    // 기존 파일은 읽지 않는다. 내용이 깨져 있어도 ConfigExists로 보고한다.
    if let Command::InitConfig = command {
        return init_config(&cli.config);
    }
    let mut cfg = config::load_or_default(&cli.config)?;
    if let Some(port) = cli.port {
        cfg.server.port = port;
    }
    match command {
        Command::Serve => {
            init_logging(&cfg.logging)?;
            serve(&cfg)
        }
        Command::InitConfig => init_config(&cli.config),
        Command::Labs => {
            let mut out = io::stdout().lock();
            for lab in labs::all() {
                writeln!(out, "{:<16} {}", lab.slug, lab.title)?;
            }
            Ok(())
        }
        Command::Calc { slug, input } => {
            init_logging(&cfg.logging)?;
            calc_command(&slug, input.as_deref())
        }
    }
}

fn serve(cfg: &Config) -> Result<(), AppError> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(web::serve(&cfg.server))?;
    Ok(())
}

fn init_config(path: &Path) -> Result<(), AppError> {
    if path.exists() {
        return Err(AppError::ConfigExists(path.to_path_buf()));
    }
    Config::default().save(path)?;
    println!("wrote default configuration to {}", path.display());
    Ok(())
}

fn calc_command(slug: &str, input: Option<&Path>) -> Result<(), AppError> {
    let lab = labs::find(slug).ok_or_else(|| AppError::UnknownLab(slug.to_string()))?;
    let body = match input {
        Some(path) => fs::read(path)?,
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            buf
        }
    };
    info!(lab = lab.slug, bytes = body.len(), "running calculation");
    let output = (lab.run_json)(&body)?;
    let mut out = io::stdout().lock();
    out.write_all(&output)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "power_engineering_labs_{name}_{}.toml",
            std::process::id()
        ))
    }

    fn init_config_cli(path: &Path) -> Cli {
        Cli {
            config: path.to_path_buf(),
            port: None,
            command: Some(Command::InitConfig),
        }
    }

    #[test]
    fn init_config_refuses_to_overwrite_broken_file() {
        let path = temp_path("broken");
        fs::write(&path, "[server\nport = ").unwrap();
        let result = run(init_config_cli(&path));
        let content = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(AppError::ConfigExists(p)) if p == path));
        assert_eq!(content, "[server\nport = ");
    }

    #[test]
    fn init_config_writes_defaults() {
        let path = temp_path("fresh");
        let _ = fs::remove_file(&path);
        run(init_config_cli(&path)).unwrap();
        let loaded = config::load_or_default(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(loaded, Config::default());
    }
}
