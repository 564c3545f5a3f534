//! # Binary persistence
//!
//! Serializes a whole graph to a byte stream and restores it later. The
//! stream starts with a magic number and a kind tag identifying the graph
//! type; a stream written for one graph type cannot be deserialized as
//! another. The payload itself is a [`bincode`] encoding of the graph.

use std::{
    fs::File,
    io::{BufReader, BufWriter, ErrorKind, Read, Result, Write},
    path::Path,
};

use serde::{Serialize, de::DeserializeOwned};

use super::{io_error, raise_error_unless};
use crate::{
    repr::{Bigraph, Graph},
    vertex::Vertex,
    weight::EdgeWeight,
};

/// First bytes of every serialized graph
const MAGIC: [u8; 4] = *b"WGRB";

/// Kind tag of a serialized [`Bigraph`]
const KIND_BIGRAPH: u8 = 0;

/// Kind tag of a serialized [`Graph`]
const KIND_GRAPH: u8 = 1;

/// Trait for writing a graph to a binary stream
pub trait BinaryWrite {
    /// Writes the graph to the provided writer.
    ///
    /// # Errors
    /// Returns an error if writing or encoding fails.
    fn try_write_binary<Wr>(&self, writer: Wr) -> Result<()>
    where
        Wr: Write;

    /// Writes the graph to a file.
    ///
    /// Internally wraps the file in a buffered writer.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or if writing fails.
    fn try_write_binary_file<P>(&self, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_binary(BufWriter::new(File::create(path)?))
    }
}

/// Trait for restoring a graph from a binary stream
pub trait BinaryRead: Sized {
    /// Reads a graph from the provided reader.
    ///
    /// # Errors
    /// Returns an error if the stream was not written by
    /// [`BinaryWrite::try_write_binary`], if it encodes a different graph
    /// kind, or if decoding fails.
    fn try_read_binary<R>(reader: R) -> Result<Self>
    where
        R: Read;

    /// Reads a graph from a file.
    ///
    /// Internally wraps the file in a buffered reader.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or if its contents are
    /// not a valid serialized graph of this kind.
    fn try_read_binary_file<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        Self::try_read_binary(BufReader::new(File::open(path)?))
    }
}

fn write_header<Wr: Write>(writer: &mut Wr, kind: u8) -> Result<()> {
    writer.write_all(&MAGIC)?;
    writer.write_all(&[kind])
}

fn read_header<R: Read>(reader: &mut R, expected_kind: u8) -> Result<()> {
    let mut magic = [0u8; 4];
    reader.read_exact(&mut magic)?;
    raise_error_unless!(
        magic == MAGIC,
        ErrorKind::InvalidData,
        "Stream does not contain a serialized graph."
    );

    let mut kind = [0u8; 1];
    reader.read_exact(&mut kind)?;
    raise_error_unless!(
        kind[0] == expected_kind,
        ErrorKind::InvalidData,
        "Stream contains a different graph kind."
    );

    Ok(())
}

impl<U, V, W> BinaryWrite for Bigraph<U, V, W>
where
    U: Vertex + Serialize,
    V: Vertex + Serialize,
    W: EdgeWeight + Serialize,
{
    fn try_write_binary<Wr>(&self, mut writer: Wr) -> Result<()>
    where
        Wr: Write,
    {
        write_header(&mut writer, KIND_BIGRAPH)?;
        bincode::serialize_into(writer, self).map_err(|e| io_error!(ErrorKind::InvalidData, e))
    }
}

impl<U, V, W> BinaryRead for Bigraph<U, V, W>
where
    U: Vertex + DeserializeOwned,
    V: Vertex + DeserializeOwned,
    W: EdgeWeight + DeserializeOwned,
{
    fn try_read_binary<R>(mut reader: R) -> Result<Self>
    where
        R: Read,
    {
        read_header(&mut reader, KIND_BIGRAPH)?;
        bincode::deserialize_from(reader).map_err(|e| io_error!(ErrorKind::InvalidData, e))
    }
}

impl<V, W> BinaryWrite for Graph<V, W>
where
    V: Vertex + Serialize,
    W: EdgeWeight + Serialize,
{
    fn try_write_binary<Wr>(&self, mut writer: Wr) -> Result<()>
    where
        Wr: Write,
    {
        write_header(&mut writer, KIND_GRAPH)?;
        bincode::serialize_into(writer, self).map_err(|e| io_error!(ErrorKind::InvalidData, e))
    }
}

impl<V, W> BinaryRead for Graph<V, W>
where
    V: Vertex + DeserializeOwned,
    W: EdgeWeight + DeserializeOwned,
{
    fn try_read_binary<R>(mut reader: R) -> Result<Self>
    where
        R: Read,
    {
        read_header(&mut reader, KIND_GRAPH)?;
        bincode::deserialize_from(reader).map_err(|e| io_error!(ErrorKind::InvalidData, e))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn bigraph_round_trip() {
        let mut g = Bigraph::<i32, i32, i64>::new();
        g.add_clique([1, 2, 3], [-1, -2, -3]);
        g.add_weighted_edge(4, -1, 7);

        let mut buffer = Vec::new();
        g.try_write_binary(&mut buffer).unwrap();

        let restored = Bigraph::<i32, i32, i64>::try_read_binary(buffer.as_slice()).unwrap();
        assert_eq!(g, restored);
        assert_eq!(restored.edge_weight(&4, &-1), Some(&7));
    }

    #[test]
    fn graph_round_trip() {
        let g = Graph::<String, i64>::from_edges([
            ("a".to_string(), "b".to_string()),
            ("b".to_string(), "c".to_string()),
        ]);

        let mut buffer = Vec::new();
        g.try_write_binary(&mut buffer).unwrap();

        let restored = Graph::<String, i64>::try_read_binary(buffer.as_slice()).unwrap();
        assert_eq!(g, restored);
    }

    #[test]
    fn kind_mismatch_fails_loudly() {
        let mut g = Bigraph::<i32, i32, i64>::new();
        g.add_edge(1, 2);

        let mut buffer = Vec::new();
        g.try_write_binary(&mut buffer).unwrap();

        let restored = Graph::<i32, i64>::try_read_binary(buffer.as_slice());
        assert_eq!(restored.unwrap_err().kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn garbage_fails_loudly() {
        let restored = Graph::<i32, i64>::try_read_binary(&b"not a graph"[..]);
        assert_eq!(restored.unwrap_err().kind(), ErrorKind::InvalidData);
    }
}
