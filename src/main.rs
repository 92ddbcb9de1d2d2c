use log::{debug, info};
use meal_finder::{
    App, FilterSelectors, HtmlRenderer, MealFinder, Renderer, Selection, TextRenderer, View,
};
use std::env;
use std::error::Error;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

const USAGE: &str = "Usage: meal-finder [--area <AREA>] [--category <CATEGORY>] [--meal <ID>] \
[--list-areas] [--list-categories] [--html] [--interactive]";

const HELP: &str = "Commands:
  areas               list areas
  categories          list categories
  area [NAME]         filter by area (no name clears it)
  category [NAME]     filter by category (no name clears it)
  open <N|ID>         show card N or a listed meal id; any id when no cards are shown
  back                back to the results
  page                print the whole page as HTML
  html | text         switch output format
  help                show this text
  quit                leave";

#[derive(Debug, Default)]
struct CliOptions {
    area: Option<String>,
    category: Option<String>,
    meal: Option<String>,
    list_areas: bool,
    list_categories: bool,
    html: bool,
    interactive: bool,
    help: bool,
}

impl CliOptions {
    fn is_one_shot(&self) -> bool {
        self.area.is_some()
            || self.category.is_some()
            || self.meal.is_some()
            || self.list_areas
            || self.list_categories
    }
}

fn parse_args(args: &[String]) -> Result<CliOptions, String> {
    let mut options = CliOptions::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        let mut value = |flag: &str| {
            iter.next()
                .filter(|v| !v.starts_with("--"))
                .cloned()
                .ok_or_else(|| format!("{flag} requires a value"))
        };
        match arg.as_str() {
            "--area" => options.area = Some(value("--area")?),
            "--category" => options.category = Some(value("--category")?),
            "--meal" => options.meal = Some(value("--meal")?),
            "--list-areas" => options.list_areas = true,
            "--list-categories" => options.list_categories = true,
            "--html" => options.html = true,
            "--interactive" | "-i" => options.interactive = true,
            "--help" | "-h" => options.help = true,
            other => return Err(format!("Unknown argument: {other}\n{USAGE}")),
        }
    }

    Ok(options)
}

fn renderer(html: bool) -> &'static dyn Renderer {
    if html {
        &HtmlRenderer
    } else {
        &TextRenderer
    }
}

fn print_names<'a>(names: impl Iterator<Item = &'a str>) {
    for name in names {
        println!("{name}");
    }
}

async fn run_once(finder: &MealFinder, options: &CliOptions) {
    let renderer = renderer(options.html);

    if options.list_areas || options.list_categories {
        let selectors = finder.selectors().await;
        if options.list_areas {
            print_names(selectors.area.names());
        }
        if options.list_categories {
            print_names(selectors.category.names());
        }
    }

    if options.area.is_some() || options.category.is_some() {
        let selection = Selection::new(options.area.as_deref(), options.category.as_deref());
        let view = View::from(finder.find(&selection).await);
        print!("{}", renderer.render(&view));
    }

    if let Some(id) = &options.meal {
        let view = View::from(finder.details(id).await);
        print!("{}", renderer.render(&view));
    }
}

fn show(app: &App, html: bool) {
    let output = renderer(html).render(app.view());
    if !output.is_empty() {
        print!("{output}");
        if html {
            println!();
        }
    }
}

// While cards are shown a number is a card position, else one of the listed ids
fn open_target(rest: &str, view: &View) -> Result<String, String> {
    let View::Cards(meals) = view else {
        return Ok(rest.to_string());
    };
    let Ok(position) = rest.parse::<usize>() else {
        return Ok(rest.to_string());
    };
    if let Some(meal) = position.checked_sub(1).and_then(|index| meals.get(index)) {
        return Ok(meal.id().to_string());
    }
    if meals.iter().any(|meal| meal.id() == rest) {
        return Ok(rest.to_string());
    }
    Err(format!("No card {position} ({} shown)", meals.len()))
}

fn print_page(selectors: &FilterSelectors, selection: &Selection, view: &View) {
    println!("{}", HtmlRenderer.render_page(selectors, selection, view));
}

async fn run_interactive(finder: &MealFinder, mut html: bool) -> Result<(), Box<dyn Error>> {
    let mut app = finder.app();
    app.start().await;
    println!("{HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };
        debug!("Command {:?} {:?}", command, rest);

        match command {
            "" => continue,
            "quit" | "exit" => break,
            "help" => println!("{HELP}"),
            "areas" => print_names(app.selectors().area.names()),
            "categories" => print_names(app.selectors().category.names()),
            "area" => {
                app.select_area(Some(rest)).await;
                show(&app, html);
            }
            "category" => {
                app.select_category(Some(rest)).await;
                show(&app, html);
            }
            "open" => {
                if rest.is_empty() {
                    println!("open requires a card number or meal id");
                    continue;
                }
                let id = match open_target(rest, app.view()) {
                    Ok(id) => id,
                    Err(message) => {
                        println!("{message}");
                        continue;
                    }
                };
                app.open_meal(&id).await;
                show(&app, html);
            }
            "back" => {
                app.back().await;
                show(&app, html);
            }
            "page" => print_page(app.selectors(), app.selection(), app.view()),
            "html" => html = true,
            "text" => html = false,
            other => println!("Unknown command: {other} (try `help`)"),
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().skip(1).collect();
    let options = parse_args(&args)?;
    if options.help {
        println!("{USAGE}");
        return Ok(());
    }

    let finder = MealFinder::from_env()?;
    info!("Using options: {:?}", options);

    if options.is_one_shot() && !options.interactive {
        run_once(&finder, &options).await;
        return Ok(());
    }

    run_interactive(&finder, options.html).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use meal_finder::{Meal, RecipeSummary};

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn cards(ids: &[&str]) -> View {
        View::Cards(
            ids.iter()
                .map(|id| {
                    Meal::Summary(RecipeSummary {
                        id: id.to_string(),
                        name: format!("Meal {id}"),
                        thumbnail_url: String::new(),
                    })
                })
                .collect(),
        )
    }

    #[test]
    fn test_parse_filters() {
        let options = parse_args(&args(&["--area", "Italian", "--category", "Seafood", "--html"]))
            .unwrap();
        assert_eq!(options.area.as_deref(), Some("Italian"));
        assert_eq!(options.category.as_deref(), Some("Seafood"));
        assert!(options.html);
        assert!(options.is_one_shot());
    }

    #[test]
    fn test_parse_missing_value() {
        let err = parse_args(&args(&["--area"])).unwrap_err();
        assert_eq!(err, "--area requires a value");

        let err = parse_args(&args(&["--category", "--html"])).unwrap_err();
        assert_eq!(err, "--category requires a value");
    }

    #[test]
    fn test_parse_unknown_argument() {
        let err = parse_args(&args(&["--frobnicate"])).unwrap_err();
        assert!(err.starts_with("Unknown argument: --frobnicate"));
    }

    #[test]
    fn test_open_picks_card_by_position() {
        let view = cards(&["52772", "52959", "52819"]);
        assert_eq!(open_target("2", &view).unwrap(), "52959");
        assert_eq!(open_target("52819", &view).unwrap(), "52819");
    }

    #[test]
    fn test_open_number_past_last_card_is_rejected() {
        let view = cards(&["52772", "52959", "52819"]);
        assert_eq!(open_target("4", &view).unwrap_err(), "No card 4 (3 shown)");
        assert_eq!(open_target("0", &view).unwrap_err(), "No card 0 (3 shown)");
    }

    #[test]
    fn test_open_without_cards_uses_id() {
        assert_eq!(open_target("4", &View::Blank).unwrap(), "4");
        assert_eq!(open_target("4", &View::Message("x".to_string())).unwrap(), "4");
    }

    #[test]
    fn test_no_arguments_is_interactive() {
        let options = parse_args(&[]).unwrap();
        assert!(!options.is_one_shot());
    }
}
