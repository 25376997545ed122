use crate::cards::Card;
use crate::hand::Hand;
use crate::simulator::{GameTrace, Round};

/// Display names for cards and anything built out of cards.
///
/// The output keeps the nesting of the input: a card becomes a `String`, a
/// sequence of cards a `Vec<String>`, a sequence of those a
/// `Vec<Vec<String>>`, and so on.
pub trait ToName {
    type Output;

    fn to_name(&self) -> Self::Output;
}

impl ToName for Card {
    type Output = String;

    fn to_name(&self) -> String {
        self.name()
    }
}

impl ToName for Hand {
    type Output = Vec<String>;

    fn to_name(&self) -> Vec<String> {
        self.names()
    }
}

impl<T: ToName + ?Sized> ToName for &T {
    type Output = T::Output;

    fn to_name(&self) -> Self::Output {
        (**self).to_name()
    }
}

impl<T: ToName> ToName for [T] {
    type Output = Vec<T::Output>;

    fn to_name(&self) -> Self::Output {
        self.iter().map(ToName::to_name).collect()
    }
}

impl<T: ToName> ToName for Vec<T> {
    type Output = Vec<T::Output>;

    fn to_name(&self) -> Self::Output {
        self.as_slice().to_name()
    }
}

impl<T: ToName, const N: usize> ToName for [T; N] {
    type Output = Vec<T::Output>;

    fn to_name(&self) -> Self::Output {
        self.as_slice().to_name()
    }
}

impl ToName for Round {
    type Output = Vec<Vec<String>>;

    fn to_name(&self) -> Self::Output {
        self.hands.to_name()
    }
}

impl ToName for GameTrace {
    type Output = Vec<Vec<Vec<String>>>;

    fn to_name(&self) -> Self::Output {
        self.rounds().to_name()
    }
}

/// Free-function form of [`ToName::to_name`].
pub fn to_name<T: ToName + ?Sized>(input: &T) -> T::Output {
    input.to_name()
}
