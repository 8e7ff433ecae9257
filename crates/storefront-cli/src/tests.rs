use super::*;

#[test]
fn parses_list_without_category() {
    let cli = Cli::try_parse_from(["storefront-cli", "list"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::List { category: None }));
    assert!(cli.seed.is_none());
}

#[test]
fn parses_list_with_category() {
    let cli = Cli::try_parse_from(["storefront-cli", "list", "--category", "jewelery"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Commands::List { category: Some(ref c) } if c == "jewelery"
    ));
}

#[test]
fn parses_categories_command() {
    let cli =
        Cli::try_parse_from(["storefront-cli", "categories"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::Categories));
}

#[test]
fn parses_price_with_options() {
    let cli = Cli::try_parse_from([
        "storefront-cli",
        "price",
        "3",
        "--size",
        "XL",
        "--color",
        "Navy",
    ])
    .expect("expected valid cli args");
    match cli.command {
        Commands::Price { id, size, color } => {
            assert_eq!(id, 3);
            assert_eq!(size.as_deref(), Some("XL"));
            assert_eq!(color.as_deref(), Some("Navy"));
        }
        other => panic!("expected Price, got: {other:?}"),
    }
}

#[test]
fn add_defaults_to_one_unit() {
    let cli = Cli::try_parse_from(["storefront-cli", "add", "1"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Commands::Add {
            id: 1,
            size: None,
            color: None,
            times: 1
        }
    ));
}

#[test]
fn seed_is_accepted_after_subcommand() {
    let cli = Cli::try_parse_from(["storefront-cli", "add", "1", "--times", "3", "--seed", "42"])
        .expect("expected valid cli args");
    assert_eq!(cli.seed, Some(42));
    assert!(matches!(cli.command, Commands::Add { times: 3, .. }));
}

#[test]
fn price_requires_product_id() {
    let result = Cli::try_parse_from(["storefront-cli", "price"]);
    assert!(result.is_err());
}

#[test]
fn subcommand_is_required() {
    let result = Cli::try_parse_from(["storefront-cli"]);
    assert!(result.is_err());
}
