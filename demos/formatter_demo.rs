use opsmsg::catalog::Catalog;
use opsmsg::config::FormatterOptions;
use opsmsg::dispatcher::formatters::{BoxFormatter, Formatter, SimpleFormatter};
use opsmsg::dispatcher::{Dispatcher, Entry, Level, Logger, LoggerDispatcher};
use opsmsg::message::Context;

fn ctx(pairs: &[(&str, &str)]) -> Context {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn banner(title: &str) {
    println!("{}", "═".repeat(80));
    println!("{}", title);
    println!("{}", "═".repeat(80));
    println!();
}

/// Demo showing each formatter rendering messages from the builtin catalog
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let builtin = Catalog::builtin()?;

    // Demo 1: full box style
    banner("Demo 1: Box Formatter");
    let boxed = LoggerDispatcher::new(Logger::new(
        BoxFormatter::new(FormatterOptions::default()),
        std::io::stdout(),
    ));

    boxed.dispatch(&builtin.new_message("SRV001", ctx(&[("port", "8080")]))?)?;
    println!();
    boxed.dispatch(&builtin.new_message(
        "SRV002",
        ctx(&[("port", "8080"), ("error", "address already in use")]),
    )?)?;
    println!();

    // CRITICAL is rendered like anything else; the demo keeps running
    let critical = builtin.new_message(
        "DEP002",
        ctx(&[("host", "db.example.com"), ("error", "connection refused")]),
    )?;
    boxed.dispatch(&critical)?;
    println!();

    // Demo 2: no borders
    banner("Demo 2: Simple Formatter");
    let simple = LoggerDispatcher::new(Logger::new(
        SimpleFormatter::new(FormatterOptions::default()),
        std::io::stdout(),
    ));

    simple.dispatch(&builtin.new_message(
        "SEC001",
        ctx(&[("ip", "192.168.1.100"), ("endpoint", "/admin")]),
    )?)?;
    println!();
    simple.dispatch(&builtin.new_message(
        "RTE002",
        ctx(&[("endpoint", "/api/v1/reports"), ("duration", "5.2s")]),
    )?)?;
    println!();

    // Demo 3: build entries by hand and format them directly
    banner("Demo 3: Formatting Entries Directly");
    let formatter = BoxFormatter::new(FormatterOptions::default());

    let entry = Entry::new(Level::Info, "Application initialized successfully")
        .with_field("id", "APP001")
        .with_field("severity", "INFO")
        .with_field("service", "payment-processor")
        .with_field("version", "v2.1.0");
    print!("{}", formatter.format(&entry));
    println!();

    let entry = Entry::new(Level::Error, "Connection timeout")
        .with_field("id", "NET002")
        .with_field("severity", "ERROR")
        .with_field("host", "api.external.com")
        .with_field("port", 443)
        .with_field("retry_count", 3)
        .with_field(
            "help",
            "Cause: Remote host did not respond. Recovery: Verify host availability and network connectivity.",
        );
    print!("{}", formatter.format(&entry));
    println!();

    // Demo 4: plain text for log files and CI output
    banner("Demo 4: Colors Disabled");
    let plain = LoggerDispatcher::new(Logger::new(
        BoxFormatter::new(FormatterOptions {
            disable_colors: true,
            ..FormatterOptions::default()
        }),
        std::io::stdout(),
    ));
    plain.dispatch(&builtin.new_message(
        "SRV003",
        ctx(&[("error", "PORT environment variable not set")]),
    )?)?;

    Ok(())
}
