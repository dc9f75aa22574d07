//! End-to-end scenarios over capture directories on disk.

#[cfg(test)]
mod support;
#[cfg(test)]
mod topology;
