use fsa_graph_lib::{
    automaton::{
        Alphabet, AutomatonContext, Graph, GraphError, Label, Language, Status, Vertex,
        subset_construction::Determinizer,
    },
    config::DeterminizeConfig,
    validation::same_language::{assert_same_language, same_language},
};

/// v1(start) -a-> v1, v1 -b-> v2(finish), v2 -c-> v2, v1 -ε-> v3
fn scenario(ctx: &mut AutomatonContext) -> (Graph, [Vertex; 3]) {
    let v1 = ctx.start_vertex("v1");
    let v2 = ctx.finish_vertex("v2");
    let v3 = ctx.continue_vertex("v3");

    let mut g = Graph::new("g");
    g.add_vertex(&v1);
    g.add_vertex(&v2);
    g.add_vertex(&v3);
    g.add_edge(&ctx.edge(&v1, &v1, "a")).unwrap();
    g.add_edge(&ctx.edge(&v1, &v2, "b")).unwrap();
    g.add_edge(&ctx.edge(&v2, &v2, "c")).unwrap();
    g.add_edge(&ctx.epsilon_edge(&v1, &v3)).unwrap();

    (g, [v1, v2, v3])
}

fn word(symbols: &str) -> Vec<Label> {
    symbols.chars().map(Label::from).collect()
}

#[test]
fn test_scenario_to_dfa() {
    let mut ctx = AutomatonContext::new();
    let (nfa, _) = scenario(&mut ctx);
    assert!(nfa.is_nfa());

    let (dfa, unchanged) = nfa.to_dfa(&mut ctx).unwrap();

    assert!(!unchanged);
    assert!(!dfa.is_nfa());
    assert_eq!(
        dfa.vertices().filter(|v| v.status() == Status::Start).count(),
        1
    );
    // {v1,v3}, {v2} and the dead state
    assert_eq!(dfa.vertex_size(), 3);
    assert_eq!(dfa.edge_size(), 9);
    assert_eq!(dfa.finish_size(), 1);
    assert_eq!(dfa.finish().next().map(|v| v.name()), Some("{v2}"));
    assert_eq!(dfa.start().map(|v| v.name()), Some("{v1,v3}"));
    assert_eq!(dfa.symbols(), word("abc"));

    assert!(dfa.matches("aabc"));
    assert!(dfa.matches("b"));
    assert!(!dfa.matches("ab c"));
    assert!(!dfa.matches("abca"));
    assert!(!dfa.matches(""));

    assert_same_language(&nfa, &dfa, 6);
}

#[test]
fn test_to_dfa_is_idempotent() {
    let mut ctx = AutomatonContext::new();
    let (nfa, _) = scenario(&mut ctx);

    let (dfa, _) = nfa.to_dfa(&mut ctx).unwrap();
    let (again, unchanged) = dfa.to_dfa(&mut ctx).unwrap();

    assert!(unchanged);
    assert_eq!(again, dfa);
    assert_eq!(again.vertex_size(), dfa.vertex_size());
}

#[test]
fn test_deterministic_graph_is_copied() {
    let mut ctx = AutomatonContext::new();
    let (mut g, [v1, _, v3]) = scenario(&mut ctx);
    g.remove_vertex(&v3);

    // the alphabet still remembers the removed epsilon edge
    assert!(g.is_nfa());

    let mut h = Graph::new("h");
    for v in g.vertices() {
        h.add_vertex(v);
    }
    for e in g.edges() {
        h.add_edge(e).unwrap();
    }
    assert!(!h.is_nfa());

    let vertex_count = ctx.vertex_count();
    let (copy, unchanged) = h.to_dfa(&mut ctx).unwrap();
    assert!(unchanged);
    assert_eq!(copy, h);
    assert_eq!(copy.start(), Some(&v1));
    assert_eq!(ctx.vertex_count(), vertex_count);
}

#[test]
fn test_accepting_start_subset() {
    let mut ctx = AutomatonContext::new();
    let s = ctx.start_vertex("s");
    let f = ctx.finish_vertex("f");

    let mut nfa = Graph::new("eps");
    nfa.add_vertex(&s);
    nfa.add_vertex(&f);
    nfa.add_edge(&ctx.epsilon_edge(&s, &f)).unwrap();
    nfa.add_edge(&ctx.edge(&f, &f, "x")).unwrap();

    let (dfa, unchanged) = nfa.to_dfa(&mut ctx).unwrap();
    assert!(!unchanged);

    let start = dfa.start().unwrap();
    assert_eq!(start.status(), Status::Start);
    assert!(dfa.is_finish(start));

    assert!(dfa.matches(""));
    assert!(dfa.matches("xxx"));
    assert_same_language(&nfa, &dfa, 5);
}

#[test]
fn test_nondeterministic_fork() {
    // (a|b)* a b
    let mut ctx = AutomatonContext::new();
    let q0 = ctx.start_vertex("q0");
    let q1 = ctx.continue_vertex("q1");
    let q2 = ctx.finish_vertex("q2");

    let mut nfa = Graph::new("fork");
    nfa.add_vertex(&q0);
    nfa.add_vertex(&q1);
    nfa.add_vertex(&q2);
    nfa.add_edge(&ctx.edge(&q0, &q0, "a")).unwrap();
    nfa.add_edge(&ctx.edge(&q0, &q0, "b")).unwrap();
    nfa.add_edge(&ctx.edge(&q0, &q1, "a")).unwrap();
    nfa.add_edge(&ctx.edge(&q1, &q2, "b")).unwrap();

    assert!(nfa.is_nfa());
    assert!(nfa.accepts(&word("aab")));
    assert!(!nfa.accepts(&word("aba")));

    let (dfa, _) = nfa.to_dfa(&mut ctx).unwrap();
    assert!(!dfa.is_nfa());
    assert_same_language(&nfa, &dfa, 7);

    assert!(dfa.matches("bbab"));
    assert!(!dfa.matches("abba"));
}

#[test]
fn test_epsilon_transitions() {
    let mut ctx = AutomatonContext::new();
    let q0 = ctx.start_vertex("q0");
    let q1 = ctx.continue_vertex("q1");
    let q2 = ctx.continue_vertex("q2");
    let q3 = ctx.continue_vertex("q3");
    let q4 = ctx.finish_vertex("q4");

    let mut nfa = Graph::new("eps");
    for q in [&q0, &q1, &q2, &q3, &q4] {
        nfa.add_vertex(q);
    }

    nfa.add_edge(&ctx.edge(&q0, &q1, "a")).unwrap();
    nfa.add_edge(&ctx.epsilon_edge(&q0, &q2)).unwrap();
    nfa.add_edge(&ctx.edge(&q1, &q2, "b")).unwrap();
    nfa.add_edge(&ctx.edge(&q2, &q3, "a")).unwrap();
    nfa.add_edge(&ctx.epsilon_edge(&q2, &q4)).unwrap();
    nfa.add_edge(&ctx.edge(&q3, &q2, "b")).unwrap();

    let (dfa, _) = nfa.to_dfa(&mut ctx).unwrap();

    assert!(dfa.matches(""));
    assert!(dfa.matches("ab"));
    assert!(dfa.matches("abab"));
    assert!(!dfa.matches("aba"));
    assert_same_language(&nfa, &dfa, 6);
}

#[test]
fn test_without_dead_state() {
    let mut ctx = AutomatonContext::new();
    let (nfa, _) = scenario(&mut ctx);

    let config = DeterminizeConfig::default().with_dead_state(false);
    let (dfa, unchanged) = Determinizer::new(&nfa, config).run(&mut ctx).unwrap();

    assert!(!unchanged);
    assert!(!dfa.is_nfa());
    // {v1,v3} and {v2}: a, b from the start, c from {v2}
    assert_eq!(dfa.vertex_size(), 2);
    assert_eq!(dfa.edge_size(), 3);
    assert!(dfa.vertices().all(|v| v.name() != "{}"));

    assert!(dfa.matches("aabc"));
    assert!(!dfa.matches("ca"));
    assert_same_language(&nfa, &dfa, 6);
}

#[test]
fn test_to_dfa_without_start() {
    let mut ctx = AutomatonContext::new();
    let a = ctx.continue_vertex("a");

    let mut nfa = Graph::new("headless");
    nfa.add_vertex(&a);
    nfa.add_edge(&ctx.epsilon_edge(&a, &a)).unwrap();

    assert_eq!(
        nfa.to_dfa(&mut ctx).unwrap_err(),
        GraphError::MissingStart {
            graph: "headless".to_string()
        }
    );
}

#[test]
fn test_multi_character_symbols() {
    let mut ctx = AutomatonContext::new();
    let s = ctx.start_vertex("s");
    let m = ctx.continue_vertex("m");
    let f = ctx.finish_vertex("f");

    let mut nfa = Graph::new("words");
    nfa.add_vertex(&s);
    nfa.add_vertex(&m);
    nfa.add_vertex(&f);
    nfa.add_edge(&ctx.edge(&s, &m, "ab")).unwrap();
    nfa.add_edge(&ctx.edge(&s, &f, "ab")).unwrap();
    nfa.add_edge(&ctx.edge(&m, &f, "cd")).unwrap();

    let (dfa, _) = nfa.to_dfa(&mut ctx).unwrap();

    assert!(dfa.matches("ab"));
    assert!(dfa.matches("abcd"));
    assert!(!dfa.matches("abc"));
    assert!(!dfa.matches("cd"));
}

#[test]
fn test_same_language_detects_difference() {
    let mut ctx = AutomatonContext::new();
    let (nfa, [_, v2, _]) = scenario(&mut ctx);

    let mut other = nfa.clone();
    other.remove_vertex(&v2);

    assert!(!same_language(&nfa, &other, 3));
    assert!(same_language(&nfa, &nfa, 3));
}
