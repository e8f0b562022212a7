use insta::{assert_json_snapshot, assert_snapshot};
use tabula::prelude::*;
use tabula::{segments, ResourceError};

#[derive(Debug)]
struct City {
    name: &'static str,
    country: &'static str,
    population: u32,
}

fn cities() -> Vec<City> {
    vec![
        City { name: "Verona", country: "Italy", population: 257_000 },
        City { name: "Venice", country: "Italy", population: 250_000 },
        City { name: "Aarhus", country: "Denmark", population: 290_000 },
        City { name: "Denver", country: "USA", population: 715_000 },
        City { name: "Bergen", country: "Norway", population: 285_000 },
        City { name: "Odense", country: "Denmark", population: 180_000 },
    ]
}

fn city_fields() -> FieldRegistry<City> {
    FieldRegistry::new()
        .string("name", |c: &City| Some(c.name))
        .string("country", |c: &City| Some(c.country))
        .numeric("population", |c: &City| Some(c.population))
}

fn render_rows(rows: &[&City]) -> String {
    rows.iter()
        .map(|c| format!("{} ({})", c.name, c.population))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_highlighted(query: &str, rows: &[&City]) -> String {
    rows.iter()
        .map(|c| {
            segments(query, c.name)
                .iter()
                .map(|s| {
                    if s.matched {
                        format!("[{}]", s.text)
                    } else {
                        s.text.to_string()
                    }
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_snapshots_page_by_population() {
    let data = cities();
    let fields = city_fields();
    let resource = DataResource::new(&data, &fields);

    let params = QueryParams::new()
        .sort_by("population")
        .descending()
        .page(1)
        .size(2);
    let rows = resource.query(&params);

    assert_snapshot!(render_rows(&rows), @r"
    Bergen (285000)
    Verona (257000)
    ");
}

#[test]
fn test_snapshots_sorted_by_country() {
    let data = cities();
    let fields = city_fields();
    let resource = DataResource::new(&data, &fields);

    let rows = resource.query(&QueryParams::new().sort_by("country"));

    assert_snapshot!(render_rows(&rows), @r"
    Aarhus (290000)
    Odense (180000)
    Verona (257000)
    Venice (250000)
    Bergen (285000)
    Denver (715000)
    ");
}

#[test]
fn test_snapshots_typeahead_highlight() {
    let data = cities();
    let ranked = RankedMatcher::new("ve")
        .field(|c: &City| Some(c.name))
        .field(|c: &City| Some(c.country))
        .order_by(compare::alpha(|c: &City| Some(c.name)))
        .rank(&data);

    assert_snapshot!(render_highlighted("ve", &ranked), @r"
    Den[ve]r
    [Ve]nice
    [Ve]rona
    Aarhus
    Bergen
    Odense
    ");
}

#[test]
fn test_snapshots_query_params_json() {
    let params = QueryParams::new().sort_by("name").descending().page(2).size(10);

    assert_json_snapshot!(params, @r#"
    {
      "page": 2,
      "size": 10,
      "sortBy": "name",
      "sortAsc": false
    }
    "#);
}

#[test]
fn test_snapshots_rank_config_json() {
    let config = RankConfig {
        max_items: Some(5),
        promote_exact: true,
    };

    assert_json_snapshot!(config, @r#"
    {
      "maxItems": 5,
      "promoteExact": true
    }
    "#);
}

#[test]
fn test_snapshots_error_messages() {
    let data = cities();
    let fields = city_fields();
    let resource = DataResource::new(&data, &fields);

    let unknown = resource
        .try_query(&QueryParams::new().sort_by("elevation"))
        .unwrap_err();
    assert_snapshot!(unknown.to_string(), @"unknown sort field 'elevation'");

    let zero = resource
        .try_query(&QueryParams::new().page(0).size(0))
        .unwrap_err();
    assert_eq!(zero, ResourceError::ZeroPageSize);
    assert_snapshot!(zero.to_string(), @"page size must be positive when a page is requested");
}
