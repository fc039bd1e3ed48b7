use safeql::{
    BuildError, Filter, ParamValue, Query, QueryData, RangeOperator, SqlValue,
    generate::{group_by, order_by, select, where_clause},
};

mod common;
use common::{TABLE, query, range, registry, values_filter};

#[test]
fn select_renders_fields_in_input_order() {
    let registry = registry();

    let q = query(&["ProductId"]);
    let data = QueryData::new(&q, &registry, TABLE);
    assert_eq!(
        select(&data).unwrap(),
        "SELECT [ProductId] FROM [MySchema].[MyTable]"
    );

    let q = query(&["Style", "ProductId"]);
    let data = QueryData::new(&q, &registry, TABLE);
    assert_eq!(
        select(&data).unwrap(),
        "SELECT [Style], [ProductId] FROM [MySchema].[MyTable]"
    );
}

#[test]
fn select_rejects_an_invalid_query() {
    let registry = registry();

    let q = query(&["NotAColumn"]);
    let data = QueryData::new(&q, &registry, TABLE);
    let err = select(&data).unwrap_err();
    assert!(matches!(err, BuildError::Validation(_)));
}

#[test]
fn where_is_empty_without_filters() {
    let registry = registry();

    let q = query(&["ProductId"]);
    let data = QueryData::new(&q, &registry, TABLE);
    let (sql, params) = where_clause(&data).unwrap();
    assert_eq!(sql, "");
    assert!(params.is_empty());
}

#[test]
fn single_filter_renders_without_parentheses() {
    let registry = registry();

    let q = Query {
        filters: Some(vec![Filter {
            property: "Age".into(),
            range: Some(range(
                Some(SqlValue::Integer(18)),
                None,
                RangeOperator::GreaterThanEqual,
            )),
            include_nulls: Some(true),
            ..Filter::default()
        }]),
        ..query(&["Age"])
    };
    let data = QueryData::new(&q, &registry, TABLE);

    let (sql, params) = where_clause(&data).unwrap();
    assert_eq!(
        sql,
        "WHERE [Age] >= @Age_GREATER_EQUAL OR [Age] IS NULL"
    );
    assert_eq!(params.len(), 1);
    assert_eq!(params[0].name(), "@Age_GREATER_EQUAL");
}

#[test]
fn multiple_filters_parenthesize_groups_joined_by_and() {
    let registry = registry();

    let q = Query {
        filters: Some(vec![
            values_filter("Name", &["A", "B"]),
            values_filter("Style", &["X"]),
        ]),
        ..query(&["Name", "Style"])
    };
    let data = QueryData::new(&q, &registry, TABLE);

    let (sql, params) = where_clause(&data).unwrap();
    assert_eq!(
        sql,
        "WHERE ([Name] IN @Name_IN) AND ([Style] = @Style_EQUAL)"
    );

    // Parameter order follows filter order, then clause order.
    let names: Vec<String> = params.iter().map(|p| p.name()).collect();
    assert_eq!(names, ["@Name_IN", "@Style_EQUAL"]);
    assert_eq!(
        params[0].value,
        ParamValue::List(vec!["A".into(), "B".into()])
    );
}

#[test]
fn clauses_within_a_group_are_or_combined() {
    let registry = registry();

    let q = Query {
        filters: Some(vec![
            Filter {
                include_nulls: Some(true),
                ..values_filter("Name", &["A"])
            },
            values_filter("Style", &["X"]),
        ]),
        ..query(&["Name", "Style"])
    };
    let data = QueryData::new(&q, &registry, TABLE);

    let (sql, _) = where_clause(&data).unwrap();
    assert_eq!(
        sql,
        "WHERE ([Name] = @Name_EQUAL OR [Name] IS NULL) AND ([Style] = @Style_EQUAL)"
    );
}

#[test]
fn group_by_is_empty_without_grouping() {
    let registry = registry();

    let q = query(&["ProductId"]);
    let data = QueryData::new(&q, &registry, TABLE);
    assert_eq!(group_by(&data), "");
}

#[test]
fn group_by_renders_columns_in_input_order() {
    let registry = registry();

    let q = Query {
        group_by: Some(vec!["Style".into(), "Name".into()]),
        ..query(&["Style", "Name"])
    };
    let data = QueryData::new(&q, &registry, TABLE);
    assert_eq!(group_by(&data), "GROUP BY [Style], [Name]");
}

#[test]
fn order_by_is_empty_for_a_blank_sort() {
    let registry = registry();

    for sort in [None, Some("".into()), Some("   ".into())] {
        let q = Query {
            sort,
            ..query(&["Age"])
        };
        let data = QueryData::new(&q, &registry, TABLE);
        assert_eq!(order_by(&data), "");
    }
}

#[test]
fn ascending_order_forces_nulls_last() {
    let registry = registry();

    // Absent, empty and unrecognized directions all sort ascending.
    for direction in [None, Some("".into()), Some("asc".into()), Some("sideways".into())] {
        let q = Query {
            sort: Some("Age".into()),
            direction,
            ..query(&["Age"])
        };
        let data = QueryData::new(&q, &registry, TABLE);
        assert_eq!(
            order_by(&data),
            "ORDER BY CASE WHEN [Age] IS NULL THEN 1 ELSE 0 END, [Age]"
        );
    }
}

#[test]
fn descending_order_is_case_insensitive() {
    let registry = registry();

    for direction in ["desc", "DESC", "Desc"] {
        let q = Query {
            sort: Some("Age".into()),
            direction: Some(direction.into()),
            ..query(&["Age"])
        };
        let data = QueryData::new(&q, &registry, TABLE);
        assert_eq!(order_by(&data), "ORDER BY [Age] DESC");
    }
}
