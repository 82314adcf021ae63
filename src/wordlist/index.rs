/// An ordered word store answering exact and prefix queries.
///
/// Queries expect their argument already in canonical case (see [`crate::alphabet::normalize`]).
pub trait Index {
    fn add(&mut self, word: &str);
    fn contains(&self, word: &str) -> bool;
    fn has_prefix(&self, prefix: &str) -> bool;

    fn add_all<'a, I>(&mut self, items: I)
        where I: IntoIterator<Item = &'a str> {
        items.into_iter().for_each(|x| self.add(x));
    }
}
