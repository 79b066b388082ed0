use clap::{Parser, Subcommand, ValueEnum};
use std::error::Error;
use std::path::PathBuf;

use ftypes_rust::ftypes_common_rs::utils::{init_logging, ConfigLoader, FtypesConfig, LogLevel};
use ftypes_rust::prelude::*;

#[derive(Parser)]
#[command(name = "ftypes")]
#[command(about = "フィールド値の解析・表示・比較ツール")]
#[command(version = "0.1.0")]
#[command(long_about = "
フィールド値レイヤの動作確認用CLIツール

サブコマンド:
- kinds:    登録済み種別の一覧
- parse:    リテラルを解析して表示
- compare:  2つのリテラルを比較
- similar:  2つの種別が互換クラスか判定
- slice:    バイト列を範囲指定で切り出す
- matches:  バイト列を正規表現で照合

表示基数・時刻表示モード・ログレベルは設定ファイル（ftypes.config.toml など）から読み込みます。
")]
struct Cli {
    /// 設定ファイル
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// デバッグモード
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum CompareOp {
    Eq,
    Ne,
    Gt,
    Ge,
    Lt,
    Le,
}

#[derive(Subcommand)]
enum Commands {
    /// 登録済み種別の一覧
    Kinds,
    /// リテラルを解析して表示
    #[command(alias = "p")]
    Parse {
        /// 種別の短い名前 (uint8, int32, absolute_time など)
        kind: String,
        /// リテラル
        literal: String,
        /// 引用符付き文字列として解析
        #[arg(short, long)]
        quoted: bool,
        /// フィルタ式リテラル形式で出力
        #[arg(short, long)]
        filter: bool,
        /// 16進表示（設定より優先）
        #[arg(short = 'x', long)]
        hex: bool,
    },
    /// 2つのリテラルを比較
    Compare {
        kind: String,
        left: String,
        right: String,
        /// 比較演算子（省略時は順序を表示）
        #[arg(short, long, value_enum)]
        op: Option<CompareOp>,
    },
    /// 2つの種別が互換クラスか判定
    Similar { left: String, right: String },
    /// バイト列を範囲指定で切り出す
    Slice {
        /// バイト列 (00:11:22 など)
        bytes: String,
        /// 範囲指定 (1:2,4-6 など)
        range: String,
    },
    /// バイト列を正規表現で照合
    Matches { bytes: String, pattern: String },
}

fn load_config(path: Option<PathBuf>) -> Result<FtypesConfig, Box<dyn Error>> {
    let loader = match path {
        Some(path) => ConfigLoader::with_paths(vec![path]),
        None => ConfigLoader::new(),
    };
    Ok(loader.load()?)
}

fn parse_kind(name: &str) -> Result<FieldKind, Box<dyn Error>> {
    Ok(name.parse::<FieldKind>()?)
}

fn display_for(kind: FieldKind, config: &FtypesConfig, hex: bool) -> FieldDisplay {
    if kind.is_time() {
        config.display.time_display()
    } else if hex {
        FieldDisplay::Hex
    } else {
        config.display.integer_display()
    }
}

fn print_kinds() {
    let registry = registry();
    println!("{:<16} {:<4} {:<7} {}", "NAME", "WIRE", "OPS", "DESCRIPTION");
    for descriptor in registry.descriptors() {
        let kind = descriptor.kind;
        let ops: String = [
            (registry.can_order(kind), 'o'),
            (registry.can_bitwise_and(kind), '&'),
            (registry.can_contain(kind), 'c'),
            (registry.can_match(kind), '~'),
            (registry.can_slice(kind), '['),
        ]
        .iter()
        .map(|(supported, flag)| if *supported { *flag } else { '-' })
        .collect();
        println!(
            "{:<16} {:<4} {:<7} {}",
            descriptor.name, descriptor.wire_size, ops, descriptor.pretty_name
        );
    }
}

fn run(cli: Cli, config: &FtypesConfig) -> Result<(), Box<dyn Error>> {
    match cli.command {
        Commands::Kinds => print_kinds(),

        Commands::Parse {
            kind,
            literal,
            quoted,
            filter,
            hex,
        } => {
            let kind = parse_kind(&kind)?;
            let value = if quoted {
                FieldValue::from_quoted(kind, &literal)?
            } else {
                FieldValue::from_literal(kind, &literal)?
            };
            let rtype = if filter { ReprKind::DFilter } else { ReprKind::Display };
            match value.to_string_repr(rtype, display_for(kind, config, hex)) {
                Some(text) => println!("{}", text),
                None => println!("<{}>", kind_pretty_name(kind)),
            }
        }

        Commands::Compare {
            kind,
            left,
            right,
            op,
        } => {
            let kind = parse_kind(&kind)?;
            if !registry().can_order(kind) {
                return Err(format!("{} values cannot be ordered", kind_pretty_name(kind)).into());
            }
            let left = FieldValue::from_literal(kind, &left)?;
            let right = FieldValue::from_literal(kind, &right)?;
            match op {
                Some(op) => {
                    let result = match op {
                        CompareOp::Eq => left.cmp_eq(&right),
                        CompareOp::Ne => left.cmp_ne(&right),
                        CompareOp::Gt => left.cmp_gt(&right),
                        CompareOp::Ge => left.cmp_ge(&right),
                        CompareOp::Lt => left.cmp_lt(&right),
                        CompareOp::Le => left.cmp_le(&right),
                    };
                    println!("{}", result);
                }
                None => println!("{:?}", left.cmp_order(&right)),
            }
        }

        Commands::Similar { left, right } => {
            let left = parse_kind(&left)?;
            let right = parse_kind(&right)?;
            println!("{}", types_are_similar(left, right));
        }

        Commands::Slice { bytes, range } => {
            let value = FieldValue::from_literal(FieldKind::Bytes, &bytes)?;
            let drange: DRange = range.parse()?;
            let sliced = value.slice(&drange)?;
            println!("{}", sliced);
        }

        Commands::Matches { bytes, pattern } => {
            let value = FieldValue::from_literal(FieldKind::Bytes, &bytes)?;
            let pattern = CompiledPattern::compile(&pattern)?;
            println!("{}", value.matches(&pattern));
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.clone())?;

    let level = if cli.debug {
        LogLevel::Debug
    } else {
        config.logging.log_level()?
    };
    init_logging(level, config.logging.colors);
    ftypes_initialize();

    run(cli, &config)
}
