//! Built-in example networks used by the `demo` command and tests.

use sixdeg_core::Node;

use crate::graph::SocialGraph;

/// Eight people and who they know. `fom` is the only `policeOffice`.
///
/// ```text
/// you → ana → evy
/// you → bob → dao, evy
/// you → cat → fom, gil
/// ```
pub fn job_network() -> SocialGraph {
    let people = [
        ("you", "unknown"),
        ("ana", "artist"),
        ("bob", "chef"),
        ("cat", "pianist"),
        ("dao", "dentist"),
        ("evy", "model"),
        ("fom", "policeOffice"),
        ("gil", "teacher"),
    ];
    let friendships = [
        ("you", "ana"),
        ("you", "bob"),
        ("you", "cat"),
        ("bob", "dao"),
        ("bob", "evy"),
        ("ana", "evy"),
        ("cat", "fom"),
        ("cat", "gil"),
    ];

    let mut graph = SocialGraph::new();
    for (name, job) in people {
        graph.add_node(Node::person(name, job));
    }
    for (from, to) in friendships {
        graph.connect(from, to);
    }
    graph
}

/// Nine friends without attributes. Mango sellers are recognised by a name
/// ending in `m`; the nearest one from `me` is `Backcom`.
pub fn mango_network() -> SocialGraph {
    SocialGraph::from_adjacency([
        ("me", vec!["Kim Byung-ji", "ParkJisung", "Lee Eul-yong"]),
        ("ParkJisung", vec!["Park Na-rae", "Huh Jae"]),
        ("Lee Eul-yong", vec!["Gomass", "Backcom"]),
        ("Kim Byung-ji", vec!["Park Na-rae", "Hong Myung-bo"]),
        ("Park Na-rae", vec![]),
        ("Huh Jae", vec![]),
        ("Gomass", vec![]),
        ("Backcom", vec![]),
        ("Hong Myung-bo", vec![]),
    ])
}
