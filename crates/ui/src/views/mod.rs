mod roadmap;

#[cfg(test)]
mod view_smoke;

pub use roadmap::RoadmapView;
