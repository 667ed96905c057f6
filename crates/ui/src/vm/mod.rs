mod roadmap_vm;

pub use roadmap_vm::{
    ChecklistItemVm, RoadmapVm, SectionBodyVm, SectionCardVm, map_roadmap,
};
