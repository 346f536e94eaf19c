use std::{error::Error, fs, path::PathBuf};

use api_types::{
    group::{GroupFile, SplitDef},
    report::{BalanceView, SettlementReport, SettlementView},
};
use clap::{Args, Parser, Subcommand};
use engine::{Group, LedgerError, Member, Split, SplitMode};

mod settings;

type AppResult<T> = Result<T, Box<dyn Error + Send + Sync>>;

#[derive(Parser, Debug)]
#[command(name = "romana")]
#[command(about = "Split shared expenses and settle who pays whom")]
struct Cli {
    /// Settings file (also read from `romana.toml` when present).
    #[arg(long, env = "ROMANA_CONFIG")]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every member's net balance.
    Balances(ReportArgs),
    /// Print the payments that bring every balance to zero.
    Settle(ReportArgs),
}

#[derive(Args, Debug)]
struct ReportArgs {
    /// Group description file (JSON). Falls back to `app.group_file` from
    /// the settings.
    file: Option<PathBuf>,

    /// Emit JSON instead of human-readable text.
    #[arg(long)]
    json: bool,
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();
    let settings = settings::Settings::new(cli.config.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "romana={level},engine={level}",
            level = settings.app.level
        ))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Balances(args) => {
            let group = load_group(&args, &settings)?;
            report(&group, &args, false)
        }
        Command::Settle(args) => {
            let group = load_group(&args, &settings)?;
            report(&group, &args, true)
        }
    }
}

fn load_group(args: &ReportArgs, settings: &settings::Settings) -> AppResult<Group> {
    let path = match (&args.file, &settings.app.group_file) {
        (Some(path), _) => path.clone(),
        (None, Some(path)) => PathBuf::from(path),
        (None, None) => return Err("no group file given (argument or app.group_file)".into()),
    };

    tracing::debug!("loading group from {}", path.display());
    let raw = fs::read_to_string(&path)?;
    let file: GroupFile = serde_json::from_str(&raw)?;
    replay(file)
}

/// Replays a group description through the engine, surfacing the engine's
/// validation errors verbatim.
fn replay(file: GroupFile) -> AppResult<Group> {
    let mut group = Group::new(&file.name);
    for name in &file.members {
        group.add_member(name);
    }

    for def in file.expenses {
        let amount = def.amount.parse()?;
        let payer = Member::new(&def.payer);
        let split = parse_split(&def.split)?;
        group.add_expense(&def.description, amount, &payer, split)?;
        tracing::debug!("recorded expense {:?}", def.description);
    }

    tracing::info!(
        "loaded group {:?}: {} members, {} expenses",
        group.name,
        group.members().len(),
        group.expenses().len()
    );
    Ok(group)
}

fn parse_split(def: &SplitDef) -> AppResult<Split> {
    let mode = SplitMode::try_from(def.mode.as_deref().unwrap_or("equal"))?;
    let split = match mode {
        SplitMode::Equal => Split::Equal,
        SplitMode::Shares => {
            let mut weights = Vec::with_capacity(def.weights.len());
            for weight in &def.weights {
                let value: f64 = weight.value.parse().map_err(|_| {
                    LedgerError::InvalidSplitParticipants(format!(
                        "invalid weight for {}: {:?}",
                        weight.member, weight.value
                    ))
                })?;
                weights.push((Member::new(&weight.member), value));
            }
            Split::Shares(weights)
        }
        SplitMode::Exact => {
            let mut amounts = Vec::with_capacity(def.weights.len());
            for weight in &def.weights {
                amounts.push((Member::new(&weight.member), weight.value.parse()?));
            }
            Split::Exact(amounts)
        }
    };
    Ok(split)
}

fn report(group: &Group, args: &ReportArgs, settle: bool) -> AppResult<()> {
    let balances = group.balances();
    let settlements = if settle { group.settlements() } else { Vec::new() };

    if args.json {
        let report = SettlementReport {
            group: group.name.clone(),
            balances: balances
                .iter()
                .map(|(member, balance)| BalanceView {
                    member: member.name().to_string(),
                    balance: balance.to_string(),
                })
                .collect(),
            settlements: settlements
                .iter()
                .map(|payment| SettlementView {
                    debtor: payment.debtor.name().to_string(),
                    creditor: payment.creditor.name().to_string(),
                    amount: payment.amount.to_string(),
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if settle {
        if settlements.is_empty() {
            println!("{}: all settled up", group.name);
        } else {
            println!("{}: suggested settlements", group.name);
            for payment in &settlements {
                println!("  {} -> {}: {}", payment.debtor, payment.creditor, payment.amount);
            }
        }
    } else {
        println!("{}: balances (+ is owed, - owes)", group.name);
        for (member, balance) in balances.iter() {
            println!("  {member}: {balance}");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::Money;

    fn ski_trip_file() -> GroupFile {
        serde_json::from_str(
            r#"{
                "name": "Ski Trip",
                "members": ["Alice", "Bob", "Chris"],
                "expenses": [
                    { "description": "Groceries", "amount": "120.00", "payer": "Alice" },
                    {
                        "description": "Gas",
                        "amount": "60.00",
                        "payer": "Bob",
                        "split": {
                            "mode": "shares",
                            "weights": [
                                { "member": "Alice", "value": "1" },
                                { "member": "Bob", "value": "2" },
                                { "member": "Chris", "value": "1" }
                            ]
                        }
                    }
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn replays_a_group_file() {
        let group = replay(ski_trip_file()).unwrap();
        let balances = group.balances();

        assert_eq!(balances.get(&Member::new("Alice")), Money::from_cents(6500));
        assert_eq!(balances.get(&Member::new("Bob")), Money::from_cents(-1000));
        assert_eq!(
            balances.get(&Member::new("Chris")),
            Money::from_cents(-5500)
        );
    }

    #[test]
    fn unknown_mode_is_rejected() {
        let mut file = ski_trip_file();
        file.expenses[1].split.mode = Some("percentage".to_string());

        let err = replay(file).unwrap_err();
        assert_eq!(
            err.downcast_ref::<LedgerError>(),
            Some(&LedgerError::InvalidSplitMode("percentage".to_string()))
        );
    }

    #[test]
    fn engine_validation_surfaces_through_replay() {
        let mut file = ski_trip_file();
        file.expenses[0].payer = "Dora".to_string();

        let err = replay(file).unwrap_err();
        assert_eq!(
            err.downcast_ref::<LedgerError>(),
            Some(&LedgerError::UnknownPayer("Dora".to_string()))
        );
    }
}
