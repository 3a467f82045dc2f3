//! The `markbook init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("markbook.toml").exists() {
        println!("markbook.toml already exists, skipping.");
    } else {
        std::fs::write("markbook.toml", SAMPLE_CONFIG)?;
        println!("Created markbook.toml");
    }

    println!("\nNext steps:");
    println!("  1. Run: markbook add --roll S1 --name Ava --marks 90 92 88");
    println!("  2. Run: markbook list");
    println!("  3. Run: markbook report --roll S1");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# markbook configuration

# Roster file used when --roster is not given on the command line
roster = "roster.csv"

# Default report style: "full" includes the remark line, "minimal" omits it
report_style = "full"
"#;
