use std::collections::BTreeSet;
use thtag::{ParseResultVerbose, PhaseSummary};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_run(res: &ParseResultVerbose, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Tagging: \"{}\"", res.text), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Passes ━━━", ansi::GRAY));
    for phase in &res.details.phases {
        print_phase(phase, &palette);
    }

    println!("\n{}", palette.paint("━━━ Tags ━━━", ansi::GRAY));
    if res.result.is_empty() {
        println!("{}", palette.dim("  No tags found"));
    } else {
        print_tags(res, &palette);
    }

    if !res.details.leftover.trim().is_empty() {
        println!("\n{}", palette.paint("━━━ Unmatched ━━━", ansi::GRAY));
        println!("  {}", palette.dim(format!("{:?}", res.details.leftover)));
    }

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!("  Total: {}", palette.paint(format!("{:?}", res.details.total), ansi::GREEN));
    println!("  {}", palette.dim(format!("{} matches / {} attempts", res.details.matched, res.details.attempts)));
    println!();
}

fn print_phase(phase: &PhaseSummary, palette: &ansi::Palette) {
    let label = format!("{}:", phase.phase);
    let outcome = if phase.matches.is_empty() {
        palette.dim(format!("✗ 0 matches / {} attempts", phase.attempts))
    } else {
        palette.paint(format!("✓ {} matches / {} attempts", phase.matches.len(), phase.attempts), ansi::GREEN)
    };
    println!("  {} {}", palette.paint(format!("{label:<13}"), ansi::BLUE), outcome);

    for m in &phase.matches {
        println!(
            "    {} {} {} {}",
            palette.paint(format!("@{}", m.start), ansi::YELLOW),
            palette.bold(format!("{:?}", m.alias)),
            palette.dim(format!("{} →", m.kind)),
            palette.paint(&m.label, ansi::CYAN)
        );
    }
}

fn print_tags(res: &ParseResultVerbose, palette: &ansi::Palette) {
    let tags = &res.result;
    let single = |name: &str, value: &Option<String>| {
        if let Some(value) = value {
            println!("  {} {}", palette.dim(format!("{name:<10}")), palette.bold(palette.paint(value, ansi::GREEN)));
        }
    };
    let many = |name: &str, values: &BTreeSet<String>| {
        if !values.is_empty() {
            let joined = values.iter().map(String::as_str).collect::<Vec<_>>().join(", ");
            println!("  {} {}", palette.dim(format!("{name:<10}")), palette.paint(joined, ansi::GREEN));
        }
    };

    single("work", &tags.work);
    single("rank", &tags.rank);
    many("route", &tags.route);
    many("character", &tags.character);
    many("ctype", &tags.ctype);
    if tags.all_spell {
        println!("  {} {}", palette.dim(format!("{:<10}", "all_spell")), palette.paint("yes", ansi::GREEN));
    }
}
