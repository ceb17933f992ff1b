//! josa - 한국어 조사 자동 선택 서식 도구

use std::process;

use clap::Parser;

use josa::config::{load_config, save_config};
use josa::format::ParticleFormatter;
use josa::{kformat, Argument};

#[derive(Parser)]
#[command(name = "josa", about = "Korean postposition-aware template formatting")]
struct Cli {
    /// Template such as "{0:은/는} {1:(이)다}." (omit to print the demo sentences)
    template: Option<String>,
    /// Positional arguments; integers and decimals are formatted as numbers
    args: Vec<String>,
    /// Culture name such as ko-KR (defaults to the config file, then the environment)
    #[arg(long)]
    locale: Option<String>,
    /// Treat every argument as text
    #[arg(long)]
    text: bool,
    /// Store --locale in the config file
    #[arg(long, requires = "locale")]
    save_locale: bool,
}

/// 명령행 인자를 값으로 변환
fn to_argument(raw: &str, text_only: bool) -> Argument {
    if text_only {
        return Argument::from(raw);
    }
    if let Ok(v) = raw.parse::<i64>() {
        return Argument::from(v);
    }
    if raw.contains('.') {
        if let Ok(v) = raw.parse::<f64>() {
            return Argument::from(v);
        }
    }
    Argument::from(raw)
}

fn print_demo(f: &ParticleFormatter) -> Result<(), josa::FormatError> {
    println!("{}", kformat!(f, "{0:은/는} {1:(이)다}.", "대한민국", "민주공화국")?);
    println!("{}", kformat!(f, "{0:은/는} {1:(이)다}.", "Korea", "republic")?);

    let sovereignty = "{0}의 {1:은/는} {2}에게 있고 모든 {3:은/는} {2:(으)로}부터 나온다.";
    println!("{}", kformat!(f, sovereignty, "대한민국", "주권", "국민", "권력")?);
    println!("{}", kformat!(f, sovereignty, "Korea", "sovereignty", "people", "power")?);

    let territory = "{0}의 {1:은/는} {2:과/와} {3:(으)로} 한다.";
    println!("{}", kformat!(f, territory, "대한민국", "국토", "한반도", "그 부속도서")?);
    println!(
        "{}",
        kformat!(f, territory, "Korea", "area", "Korean Peninsula", "its islands")?
    );
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let mut config = load_config();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    if let Some(locale) = cli.locale.clone() {
        config.locale = Some(locale);
    }

    let formatter = match config.formatter() {
        Ok(f) => f,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(2);
        }
    };
    log::debug!("문화권: '{}'", formatter.culture().name);

    if cli.save_locale {
        if let Err(e) = save_config(&config) {
            log::error!("설정 저장 실패: {}", e);
        }
    }

    let result = match cli.template.as_deref() {
        None => print_demo(&formatter),
        Some(template) => {
            let args: Vec<Argument> =
                cli.args.iter().map(|a| to_argument(a, cli.text)).collect();
            formatter.format(template, &args).map(|out| println!("{}", out))
        }
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        process::exit(1);
    }
}
