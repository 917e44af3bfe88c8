/*!
* # Relay - A library for modeling observer bias in race speed distributions.
* An observer watching a race from the course does not see the field as it is.  The chance of
* passing or being passed by another runner is proportional to the difference between their
* speeds, so speeds far from the observer's own speed are overrepresented in the record the
* observer collects, and speeds near it are underrepresented.  The functions in this crate build
* an empirical speed distribution from a file of race results, reweight it as seen by observers at
* chosen speeds, and render the resulting distributions as histograms and cumulative distribution
* curves.
*
*  - Please direct questions, comments or insults to the [github repository](https://github.com/crumplecup/relay).
*  - View the crate documentation on [docs.rs](https://docs.rs/relay/).
*
*  ## Quick Start
*
* To use relay, add it to your `Cargo.toml`
* ```toml
* [dependencies]
* relay = "^0.1.0"
* ```
*
*  - Load the crate prelude in the preamble of your `main.rs`.
*  - Load race results and plot the field as a 7.5 mph observer sees it:
* ```no_run
* use relay::prelude::*;
*
* fn main() -> Result<(), Box<dyn std::error::Error>> {
*     // finish place, division, gun/net times and pace for each runner
*     let results = Record::read("data/results.csv")?;
*
*     // subset the open men's division
*     let open: Vec<Record> = results.iter()
*         .filter(|x| x.division == "M2039")
*         .cloned()
*         .collect();
*     let speeds = race::speeds(&open)?;
*
*     // distribution of actual speeds, and the biased distribution seen
*     // by a runner overtaking at 7.5 mph
*     let actual = Pmf::from_values(&speeds)?;
*     let observed = actual.bias(7.5)?;
*
*     let fig = Figure::new("observed_speeds.png")
*         .title("PMF of running speed")
*         .x_desc("speed (mph)")
*         .y_desc("probability");
*     plot::pmfs(&[("observed @ 7.5mph", &observed)], &fig)?;
*
*     Ok(())
* }
* ```
*
* The bias transform never touches its input, so one empirical distribution serves any number of
* observer speeds:
*
* ```rust
* use relay::prelude::*;
*
* fn main() -> Result<(), RelayError> {
*     let actual = Pmf::from_values(&vec![5.0, 7.5, 7.5, 10.0])?;
*     let observed = actual.bias(7.5)?;
*
*     // an observer at 7.5 mph never passes a 7.5 mph runner
*     assert_eq!(0.0, observed.prob(7.5));
*     assert_eq!(0.5, observed.prob(10.0));
*     Ok(())
* }
* ```
*
* Describe output files using a builder pattern.  First make a blank figure with
* [new](plot/struct.Figure.html#method.new), then assign it features using the
* [title](plot/struct.Figure.html#method.title),
* [x_desc](plot/struct.Figure.html#method.x_desc),
* [y_desc](plot/struct.Figure.html#method.y_desc) and
* [size](plot/struct.Figure.html#method.size) methods.
*
* ```rust
* use relay::prelude::*;
*
* // build step by step
* let mut fig = Figure::new("observed_speeds_cdf.png");
* fig = fig.title("CDF of running speed");
* fig = fig.x_desc("speed (mph)");
* fig = fig.y_desc("cumulative probability");
*
* // or inline, same result
* let fig_b = Figure::new("observed_speeds_cdf.png")
*     .title("CDF of running speed")
*     .x_desc("speed (mph)")
*     .y_desc("cumulative probability");
*
* assert_eq!(fig, fig_b);
* ```
*/

#![warn(missing_docs)]
pub mod errors;
pub mod plot;
pub mod pmf;
pub mod race;
pub mod utils;

pub mod prelude {
    //! Common types for working with speed distributions.
    pub use crate::errors::RelayError;
    pub use crate::plot;
    pub use crate::plot::Figure;
    pub use crate::pmf::{Cdf, Pmf};
    pub use crate::race;
    pub use crate::race::Record;
    pub use crate::utils;
}
