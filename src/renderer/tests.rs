use super::{Renderer, templates::tests::context};
use crate::wikitext::SimpleParser;

const BASE_DIR: &str = "./src/renderer/tests";

macro_rules! run_tests {
    ($($name:ident),* $(,)?) => {
        $(#[test]
        fn $name() {
            run_test(
                stringify!($name),
                include_str!(concat!("./tests/", stringify!($name), ".txt"))
            );
        })*
    }
}

/// Renders a description. The first line of the input is the genre name.
#[track_caller]
fn run_test(test_name: &str, input: &str) {
    use std::io::Write as _;

    let _ = env_logger::try_init();
    let (genre_name, description) = input
        .split_once('\n')
        .expect("test input should start with a genre name line");

    let mut mint = goldenfile::Mint::new(format!("{BASE_DIR}/goldenfiles"));
    let mut file = mint.new_goldenfile(format!("{test_name}.html")).unwrap();
    let result = Renderer::new(&SimpleParser, context())
        .render_description(Some(genre_name), description.trim_end());
    let _ = writeln!(file, "{}", result.to_html());
}

run_tests! {
    acid_house,
    city_pop,
    hip_house,
    k_pop,
}
