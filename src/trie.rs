// This file is part of WordGrid.
//
// WordGrid is free software: you can redistribute it and/or modify it under the terms of the
// GNU General Public License as published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// WordGrid is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See
// the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with WordGrid. If
// not, see <https://www.gnu.org/licenses/>.

const ALPHABET_SIZE: usize = 26;

// Only meaningful for the index that handed it out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    fn index(self) -> usize {
        return self.0 as usize;
    }
}

#[derive(Debug, Clone, Default)]
struct Node {
    children: [Option<NodeId>; ALPHABET_SIZE],
    terminal: bool,
}

pub fn letter_index(c: char) -> Option<usize> {
    let upper = c.to_ascii_uppercase();
    if !upper.is_ascii_uppercase() { return None; }
    return Some((upper as u8 - b'A') as usize);
}

#[derive(Debug, Clone)]
pub struct PrefixIndex {
    nodes: Vec<Node>,
    words: usize,
}

impl Default for PrefixIndex {
    fn default() -> Self {
        return Self::new();
    }
}

impl PrefixIndex {
    pub fn new() -> Self {
        return Self {
            nodes: vec![Node::default()],
            words: 0,
        };
    }

    pub fn root(&self) -> NodeId {
        return NodeId(0);
    }

    // Non-letters are skipped, not rejected. A word with no letters never marks the root.
    pub fn insert(&mut self, word: &str) {
        let mut node = self.root();
        let mut letters = 0;

        for slot in word.chars().filter_map(letter_index) {
            letters += 1;
            node = match self.nodes[node.index()].children[slot] {
                Some(child) => child,
                None => {
                    let child = NodeId(self.nodes.len() as u32);
                    self.nodes.push(Node::default());
                    self.nodes[node.index()].children[slot] = Some(child);
                    child
                }
            };
        }

        if letters == 0 { return; }

        let last = &mut self.nodes[node.index()];
        if !last.terminal {
            last.terminal = true;
            self.words += 1;
        }
    }

    pub fn child(&self, node: NodeId, letter: char) -> Option<NodeId> {
        let slot = letter_index(letter)?;
        return self.nodes.get(node.index())?.children[slot];
    }

    pub fn is_terminal(&self, node: NodeId) -> bool {
        return self.nodes.get(node.index()).map_or(false, |n| n.terminal);
    }

    // Unlike insert(), a non-letter here is a dead end.
    pub fn find(&self, prefix: &str) -> Option<NodeId> {
        let mut node = self.root();
        for c in prefix.chars() {
            node = self.child(node, c)?;
        }
        return Some(node);
    }

    pub fn contains(&self, word: &str) -> bool {
        return self.find(word).map_or(false, |node| self.is_terminal(node));
    }

    pub fn starts_with(&self, prefix: &str) -> bool {
        return self.find(prefix).is_some();
    }

    pub fn len(&self) -> usize {
        return self.words;
    }

    pub fn is_empty(&self) -> bool {
        return self.words == 0;
    }

    pub fn node_count(&self) -> usize {
        return self.nodes.len();
    }
}

impl<'a> Extend<&'a str> for PrefixIndex {
    fn extend<T: IntoIterator<Item = &'a str>>(&mut self, iter: T) {
        for word in iter {
            self.insert(word);
        }
    }
}

impl<'a> FromIterator<&'a str> for PrefixIndex {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        let mut index = Self::new();
        index.extend(iter);
        return index;
    }
}
