use booltable::{
    analysis::arrange,
    parse,
    types::{Formula, PropositionalVariable, VariableList},
};

fn variables(names: &str) -> VariableList {
    VariableList(names.chars().map(PropositionalVariable).collect())
}

#[test]
fn collects_sorted_unique_variables() {
    let test_cases = [
        ("P+Q*R", "PQR"),
        ("c*b+a=>b", "abc"),
        ("a*a*a", "a"),
        ("b*a*B*A", "ABab"),
        ("1+0", ""),
        ("-(z=>-y)", "yz"),
    ];

    for (i, (input, expected)) in test_cases.into_iter().enumerate() {
        assert_eq!(
            parse(input).unwrap().variables(),
            variables(expected),
            "Test case {}; Input: {}",
            i + 1,
            input
        );
    }
}

#[test]
fn variable_list_is_strictly_ascending() {
    for input in ["z+y*x=>w", "-(m*k)+(k=>m)*a", "Q*q+(q=>Q)"] {
        let list = parse(input).unwrap().variables();

        assert!(
            list.0.windows(2).all(|pair| pair[0] < pair[1]),
            "Input: {}",
            input
        );
    }
}

#[test]
fn collects_nodes_in_pre_order() {
    let formula = parse("1+a*b").unwrap();

    let nodes = formula
        .nodes()
        .into_iter()
        .map(|node| node.to_string())
        .collect::<Vec<_>>();

    assert_eq!(nodes, ["((1+a)*b)", "(1+a)", "1", "a", "b"]);
}

#[test]
fn keeps_repeated_sub_formulas() {
    let formula = parse("-a*-a").unwrap();

    let nodes = formula
        .nodes()
        .into_iter()
        .map(|node| node.to_string())
        .collect::<Vec<_>>();

    assert_eq!(nodes, ["(-a*-a)", "-a", "a", "-a", "a"]);
}

#[test]
fn arranges_variables_then_innermost_first() {
    let test_cases: [(&str, &[&str]); 6] = [
        ("a", &["a"]),
        ("1", &["1"]),
        ("a*b", &["a", "b", "(a*b)"]),
        ("1+a*b", &["a", "b", "1", "(1+a)", "((1+a)*b)"]),
        ("-(-a+b)", &["a", "b", "-a", "(-a+b)", "-(-a+b)"]),
        ("-a*-a", &["a", "-a", "-a", "(-a*-a)"]),
    ];

    for (i, (input, expected)) in test_cases.into_iter().enumerate() {
        let formula = parse(input).unwrap();
        let columns = arrange(&formula.nodes(), &formula.variables());

        assert_eq!(
            columns.iter().map(Formula::to_string).collect::<Vec<_>>(),
            expected,
            "Test case {}; Input: {}",
            i + 1,
            input
        );
    }
}

#[test]
fn whole_formula_is_last_column() {
    for input in ["a=>b=>c", "(p+q)*-r", "-x"] {
        let formula = parse(input).unwrap();
        let columns = arrange(&formula.nodes(), &formula.variables());

        assert_eq!(columns.last(), Some(&formula), "Input: {}", input);
    }
}
