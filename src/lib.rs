//! HeavyKeeper is for finding Top-K elephant flows with high precision and low memory footprint
//!
//! This implementation is based on the paper HeavyKeeper: An Accurate Algorithm for Finding Top-k Elephant Flows
//! by Junzhi Gong, Tong Yang, Haowei Zhang, and Hao Li, Peking University; Steve Uhlig, Queen Mary, University of London;
//! Shigang Chen, University of Florida; Lorna Uden, Staffordshire University; Xiaoming Li, Peking University
//!
//! ```
//! use heavykeeper_sketch::TopK;
//!
//! let mut topk = TopK::new(1024, 4).unwrap();
//! topk.add("frequent item", 5).unwrap();
//! topk.add("rare item", 1).unwrap();
//!
//! let nodes = topk.top_k();
//! assert_eq!(nodes[0].item, b"frequent item");
//! assert_eq!(nodes[0].count, 5);
//! ```

mod heavykeeper;
pub use heavykeeper::{Builder, Node, TopK, DEFAULT_CAPACITY};

mod error;
pub use error::{Error, Result};

mod decay;
pub use decay::DEFAULT_DECAY;

mod buckets;
mod hash_composition;
mod priority_queue;

#[cfg(test)]
mod testing;
