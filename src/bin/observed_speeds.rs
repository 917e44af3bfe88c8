use relay::prelude::*;

/// Renders the distribution of running speeds seen by observers on the course
/// at 5, 7.5 and 10 mph, as a histogram and as cumulative distribution curves.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();

    let results = Record::read("data/results.csv")?;
    let speeds = race::speeds(&results)?;
    log::info!(
        "Loaded {} finishers, mean speed {:.2} mph.",
        speeds.len(),
        utils::mean(&speeds)
    );

    // distribution of actual speeds
    let actual = Pmf::from_values(&speeds)?;

    // the biased distributions seen by each observer
    let observed = actual.bias(7.5)?;
    let observed_slow = actual.bias(5.0)?;
    let observed_fast = actual.bias(10.0)?;

    let pmf_series = [
        ("observed @ 7.5mph", &observed),
        ("observed @ 5mph", &observed_slow),
        ("observed @ 10mph", &observed_fast),
    ];
    let fig = Figure::new("observed_speeds.png")
        .title("PMF of running speed")
        .x_desc("speed (mph)")
        .y_desc("probability");
    plot::pmfs(&pmf_series, &fig)?;

    let cdf = observed.cdf();
    let cdf_slow = observed_slow.cdf();
    let cdf_fast = observed_fast.cdf();
    let cdf_series = [
        ("observed @ 7.5mph", &cdf),
        ("observed @ 5mph", &cdf_slow),
        ("observed @ 10mph", &cdf_fast),
    ];
    let fig = Figure::new("observed_speeds_cdf.png")
        .title("CDF of running speed")
        .x_desc("speed (mph)")
        .y_desc("cumulative probability");
    plot::cdfs(&cdf_series, &fig)?;

    log::info!("Median speed seen at 7.5 mph: {:.2} mph.", cdf.value(0.5));
    Ok(())
}
