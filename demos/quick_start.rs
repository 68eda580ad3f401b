use snug_error::prelude::*;

#[derive(Debug, Clone)]
enum Field {
    Text(String),
    Number(i64),
    Missing,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Text(text) => write!(f, "{text}"),
            Field::Number(number) => write!(f, "{number}"),
            Field::Missing => write!(f, "<missing>"),
        }
    }
}

fn present(ctx: &CheckContext<'_, Field>, args: &[Field]) -> CheckResult {
    ensure!(ctx, !matches!(args.first(), None | Some(Field::Missing)), "E001");
    Ok(())
}

fn same_total(ctx: &CheckContext<'_, Field>, args: &[Field]) -> CheckResult {
    let total: i64 = args
        .iter()
        .map(|field| match field {
            Field::Number(number) => *number,
            _ => 0,
        })
        .sum();
    if total != 10 {
        throw!(ctx, "E002", Field::Number(total));
    }
    Ok(())
}

fn main() {
    let factory = CheckerFactory::create(
        CheckerConfig::new()
            .dictionary(
                ErrorDictionary::new()
                    .entry("E001", |_: &[Field]| "ERRO 1".to_string())
                    .entry("E002", |args: &[Field]| format!("ERRO: {}", args[0])),
            )
            .on_error(|err| eprintln!("[on_error] {err}")),
    );

    let checker = factory.checker(vec![check!(present), check!(same_total)]);
    let cursor = checker.call([Field::Text("signup form".into())]);

    println!("1. Step through the chain:");
    match cursor.next(&[Field::Missing]) {
        Ok(()) => println!("   present: ok"),
        Err(err) => println!("   present: {err}"),
    }
    match cursor.next(&[Field::Number(1), Field::Number(3)]) {
        Ok(()) => println!("   same_total: ok"),
        Err(err) => println!("   same_total: {err}"),
    }

    println!("\n2. Jump to a named check with a message:");
    if let Ok(pinned) = cursor.message("retry").error("same_total") {
        let outcome = pinned.call(&[Field::Number(4), Field::Number(6)]);
        println!("   same_total (retry): {outcome:?}");
    }

    println!("\n3. Unknown check names are rejected up front:");
    if let Err(err) = cursor.error("phone") {
        println!("   {err}");
    }

    println!("\n4. History of this call:");
    for err in &cursor.errors() {
        println!("   - {} / {}", err.name(), err.message());
    }
}
