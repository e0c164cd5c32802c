//! upsc-snmp-agent: Net-SNMP pass_persist agent for NUT UPS devices.
//!
//! Configure in snmpd.conf:
//!
//! ```text
//! pass_persist .1.3.6.1.2.1.33 /usr/local/bin/upsc-snmp-agent theups
//! ```

use clap::Parser;
use std::process::ExitCode;
use tokio::io::BufReader;
use tokio::time::Instant;
use upsc_snmp_agent::Agent;
use upsc_snmp_agent::cache::Refresh;
use upsc_snmp_agent::cli::args::{AgentArgs, OutputArgs};
use upsc_snmp_agent::cli::output::{collect_entries, write_dump, write_error};

/// Serve UPS-MIB values read from `upsc` to snmpd over pass_persist.
#[derive(Debug, Parser)]
#[command(name = "upsc-snmp-agent", version, about)]
struct Args {
    #[command(flatten)]
    agent: AgentArgs,

    #[command(flatten)]
    output: OutputArgs,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();
    args.output.init_tracing();

    let config = args.agent.to_config();
    let mut agent = Agent::from_config(&config);

    if args.output.dump {
        return dump(&mut agent, &args).await;
    }

    let stdin = BufReader::new(tokio::io::stdin());
    match agent.run(stdin, tokio::io::stdout()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "protocol stream failed");
            write_error(&e);
            ExitCode::FAILURE
        }
    }
}

async fn dump(agent: &mut Agent<upsc_snmp_agent::adapter::UpscAdapter>, args: &Args) -> ExitCode {
    if agent.refresh(Instant::now()).await == Refresh::Failed {
        eprintln!(
            "Warning: could not sample {}, showing defaults",
            agent.cache().device()
        );
    }

    let entries = collect_entries(agent.handler(), agent.cache().store());
    let mut stdout = std::io::stdout().lock();
    if let Err(e) = write_dump(&mut stdout, &entries, args.output.format) {
        eprintln!("Error writing output: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
