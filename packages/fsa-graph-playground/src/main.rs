use colored::Colorize;
use fsa_graph_lib::{
    automaton::{AutomatonContext, Graph, subset_construction::Determinizer},
    config::{DeterminizeConfig, GeneralConfig, LoggerConfig},
    logger::{LogLevel, init_tracing},
};

fn main() -> anyhow::Result<()> {
    let config = match std::env::var("FSA_GRAPH_CONFIG") {
        Ok(path) => DeterminizeConfig::from_file(path)?,
        Err(_) => DeterminizeConfig::default().with_logger(
            LoggerConfig::default()
                .with_enabled(true)
                .with_log_level(LogLevel::Debug),
        ),
    };
    init_tracing(config.logger())?;

    let mut ctx = AutomatonContext::new();
    let v1 = ctx.start_vertex("v1");
    let v2 = ctx.finish_vertex("v2");
    let v3 = ctx.continue_vertex("v3");

    let mut nfa = Graph::new("g");
    nfa.add_vertex(&v1);
    nfa.add_vertex(&v2);
    nfa.add_vertex(&v3);
    nfa.add_edge(&ctx.edge(&v1, &v1, "a"))?;
    nfa.add_edge(&ctx.edge(&v1, &v2, "b"))?;
    nfa.add_edge(&ctx.edge(&v2, &v2, "c"))?;
    nfa.add_edge(&ctx.epsilon_edge(&v1, &v3))?;

    println!("{}", nfa);
    tracing::info!("is nfa: {}", nfa.is_nfa());

    let (dfa, unchanged) = Determinizer::new(&nfa, config).run(&mut ctx)?;
    tracing::info!("conversion needed: {}", !unchanged);

    println!("{}", dfa);
    println!("{}", dfa.to_graphviz());

    for input in ["aabc", "b", "bcc", "", "ac", "abca"] {
        let verdict = if dfa.matches(input) {
            "accepted".bright_green()
        } else {
            "rejected".bright_red()
        };
        println!("{:>6} {}", format!("{:?}", input), verdict);
    }

    Ok(())
}
