//! Cross-trigger routing: a fired sensor activates every other channel.

/// Target channels for a trigger on `source`, in ascending index order.
///
/// Channels without a text model are still included; they degrade to the
/// offline sentence so that something happens on every other printer.
/// Ascending order keeps a given trigger printing in the same relative
/// order on every run.
pub fn targets(source: usize, channels: usize) -> impl Iterator<Item = usize> {
    (0..channels).filter(move |&j| j != source)
}
