use chrono::{Local, NaiveDate};

use crate::{
    cli::{output, render},
    config::{Config, ConfigManager},
    currency::GroupingStyle,
    domain::TxnKind,
    errors::TallyError,
    ledger::{ConfirmationGate, LedgerStore},
    report,
    storage::JsonStorage,
};

pub enum LoopControl {
    Continue,
    Exit,
}

/// Shell state: the ledger store, display config (with its manager for
/// persisting changes), and the confirmation gate used for destructive
/// commands.
pub struct ShellContext {
    store: LedgerStore,
    config: Config,
    config_manager: ConfigManager,
    gate: Box<dyn ConfirmationGate>,
}

impl ShellContext {
    pub fn new(gate: Box<dyn ConfirmationGate>) -> Result<Self, TallyError> {
        let storage = JsonStorage::new_default()?;
        let store = LedgerStore::load(Box::new(storage));
        Self::with_parts(store, ConfigManager::new()?, gate)
    }

    pub fn with_parts(
        store: LedgerStore,
        config_manager: ConfigManager,
        gate: Box<dyn ConfirmationGate>,
    ) -> Result<Self, TallyError> {
        let config = config_manager.load()?;
        Ok(Self {
            store,
            config,
            config_manager,
            gate,
        })
    }

    pub fn banner(&self) {
        output::info(format!(
            "Tally — {} transaction(s), data in {}",
            self.store.len(),
            self.store.location().display()
        ));
        output::info("Type `help` for commands.");
    }

    pub fn dispatch(&mut self, command: &str, args: &[&str]) -> LoopControl {
        match command {
            "add" => self.cmd_add(args),
            "list" | "ls" => self.cmd_list(args),
            "months" => render::months(&report::distinct_months(self.store.transactions())),
            "summary" => render::summary(&self.config, &report::totals(self.store.transactions())),
            "chart" | "charts" => self.cmd_charts(),
            "delete" | "rm" => self.cmd_delete(args),
            "clear" => self.cmd_clear(),
            "config" => self.cmd_config(args),
            "help" | "?" => print_help(),
            "quit" | "exit" | "q" => return LoopControl::Exit,
            other => output::warning(format!("Unknown command `{other}`. Try `help`.")),
        }
        LoopControl::Continue
    }

    fn cmd_add(&mut self, args: &[&str]) {
        let (description, amount, kind, date) = match parse_add_args(args) {
            Ok(parts) => parts,
            Err(message) => {
                output::error(message);
                return;
            }
        };
        match self.store.add(description, amount, kind, date) {
            Ok(txn) => {
                output::success(format!("Added {} ({})", txn.description, txn.kind.label()));
                render::dashboard(&self.config, self.store.transactions());
            }
            Err(err) => output::error(err),
        }
    }

    fn cmd_list(&self, args: &[&str]) {
        let month = match args.first() {
            Some(&raw) => match normalize_month(raw) {
                Some(month) => Some(month),
                None => {
                    output::error(format!("`{raw}` is not a YYYY-MM month"));
                    return;
                }
            },
            None => None,
        };
        let rows = report::filter_by_month(self.store.transactions(), month.as_deref());
        render::list(&self.config, &rows, month.as_deref());
    }

    fn cmd_charts(&self) {
        let transactions = self.store.transactions();
        render::split_chart(&self.config, &report::totals(transactions));
        render::trend_chart(&self.config, &report::by_month(transactions));
    }

    fn cmd_delete(&mut self, args: &[&str]) {
        let Some(&prefix) = args.first() else {
            output::error("Usage: delete <id-prefix>");
            return;
        };
        let Some(id) = self.store.resolve_id(prefix) else {
            output::warning(format!("No unique transaction matches `{prefix}`"));
            return;
        };
        match self.store.remove(id, self.gate.as_mut()) {
            Ok(true) => {
                output::success("Transaction deleted");
                render::dashboard(&self.config, self.store.transactions());
            }
            Ok(false) => output::info("Nothing deleted."),
            Err(err) => output::error(err),
        }
    }

    fn cmd_config(&mut self, args: &[&str]) {
        match args {
            [] => {
                output::section("Config");
                output::info(format!("symbol    {}", self.config.currency_symbol));
                output::info(format!("locale    {}", self.config.locale.language_tag));
                output::info(format!(
                    "grouping  {}",
                    grouping_label(self.config.locale.grouping)
                ));
                output::info(format!("file      {}", self.config_manager.path().display()));
            }
            ["symbol", symbol] => {
                self.config.currency_symbol = (*symbol).to_string();
                self.save_config();
            }
            ["grouping", raw] => match parse_grouping(raw) {
                Some(style) => {
                    self.config.locale.grouping = style;
                    self.save_config();
                }
                None => output::error(format!("`{raw}` is not thousands|lakh")),
            },
            _ => output::error("Usage: config [symbol <symbol> | grouping <thousands|lakh>]"),
        }
    }

    fn save_config(&self) {
        match self.config_manager.save(&self.config) {
            Ok(()) => output::success("Config saved"),
            Err(err) => output::error(err),
        }
    }

    fn cmd_clear(&mut self) {
        match self.store.clear(self.gate.as_mut()) {
            Ok(true) => {
                output::success("All transactions deleted");
                render::dashboard(&self.config, self.store.transactions());
            }
            Ok(false) => output::info("Nothing deleted."),
            Err(err) => output::error(err),
        }
    }
}

fn parse_add_args<'a>(args: &[&'a str]) -> Result<(&'a str, f64, TxnKind, NaiveDate), String> {
    let usage = "Usage: add <description> <amount> <income|expense> [YYYY-MM-DD]";
    let (&description, rest) = args.split_first().ok_or_else(|| usage.to_string())?;
    let (&amount_raw, rest) = rest.split_first().ok_or_else(|| usage.to_string())?;
    let (&kind_raw, rest) = rest.split_first().ok_or_else(|| usage.to_string())?;

    let amount: f64 = amount_raw
        .parse()
        .map_err(|_| format!("`{amount_raw}` is not a number"))?;
    let kind =
        TxnKind::parse(kind_raw).ok_or_else(|| format!("`{kind_raw}` is not income|expense"))?;
    let date = match rest.first() {
        Some(&raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|_| format!("`{raw}` is not a YYYY-MM-DD date"))?,
        // Mirrors the form's prefilled date field.
        None => Local::now().date_naive(),
    };
    Ok((description, amount, kind, date))
}

fn parse_grouping(raw: &str) -> Option<GroupingStyle> {
    match raw.trim().to_lowercase().as_str() {
        "thousands" => Some(GroupingStyle::Thousands),
        "lakh" => Some(GroupingStyle::Lakh),
        _ => None,
    }
}

fn grouping_label(style: GroupingStyle) -> &'static str {
    match style {
        GroupingStyle::Thousands => "thousands",
        GroupingStyle::Lakh => "lakh",
    }
}

fn normalize_month(raw: &str) -> Option<String> {
    let date = NaiveDate::parse_from_str(&format!("{}-01", raw.trim()), "%Y-%m-%d").ok()?;
    Some(date.format("%Y-%m").to_string())
}

fn print_help() {
    output::section("Commands");
    output::info("add <description> <amount> <income|expense> [YYYY-MM-DD]");
    output::info("list [YYYY-MM]      show transactions, optionally one month");
    output::info("months              list months available for filtering");
    output::info("summary             income / expense / balance totals");
    output::info("chart               category split and monthly trend");
    output::info("delete <id-prefix>  delete one transaction (asks first)");
    output::info("clear               delete all transactions (asks first)");
    output::info("config              show or change display settings");
    output::info("quit                leave the shell");
}
