use clap::Parser;
use sunfish::{
    cli::{Args, Command},
    prelude::*,
    tables,
};

fn main() -> Result {
    tracing_subscriber::fmt().with_target(false).init();

    match Args::parse().command {
        Command::Race(args) => {
            let competition = args.course.competition();
            let series = args.course.series(&competition);
            let mut boat = args.boat();
            let controller = args.strategy.controller();
            info!(
                name = %competition.name,
                n_events = competition.events.len(),
                n_samples = series.len(),
                "racing",
            );

            let outcome = competition.run(&series, &mut boat, controller.as_ref())?;

            println!("{}", tables::build_competition_table(&outcome));
            info!(final_soc = boat.battery.soc(), "done");
            Ok(())
        }
    }
}
