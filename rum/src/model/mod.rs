mod lpmc;
mod optima;
mod swissmetro;

pub use lpmc::lpmc;
pub use optima::optima;
pub use swissmetro::swissmetro;
