//! State-machine test: SeqList against a Vec reference model.

use nexus_seq::{Error, SeqList};
use proptest::prelude::*;
use proptest::test_runner::Config;
use proptest_state_machine::{ReferenceStateMachine, StateMachineTest, prop_state_machine};

prop_state_machine! {
    #![proptest_config(Config {
        failure_persistence: None,
        .. Config::default()
    })]

    #[test]
    fn seq_list_matches_vec(sequential 1..200 => SeqListTest);
}

#[derive(Clone, Debug)]
enum Transition {
    PushFront(u32),
    PushBack(u32),
    Insert(usize, u32),
    InsertAfter(u32, u32),
    PopFront,
    PopBack,
    Remove(u32),
    RemoveAt(usize),
    Set(usize, u32),
    CursorRemoveAll(u32),
    Clear,
}

/// Small value domain so duplicates and misses both happen.
fn value() -> impl Strategy<Value = u32> {
    0u32..8
}

fn index() -> impl Strategy<Value = usize> {
    0usize..12
}

struct VecModel;

impl ReferenceStateMachine for VecModel {
    type State = Vec<u32>;
    type Transition = Transition;

    fn init_state() -> BoxedStrategy<Self::State> {
        Just(Vec::new()).boxed()
    }

    fn transitions(_state: &Self::State) -> BoxedStrategy<Self::Transition> {
        prop_oneof![
            3 => value().prop_map(Transition::PushFront),
            3 => value().prop_map(Transition::PushBack),
            2 => (index(), value()).prop_map(|(i, v)| Transition::Insert(i, v)),
            2 => (value(), value()).prop_map(|(t, v)| Transition::InsertAfter(t, v)),
            2 => any::<bool>().prop_map(|front| if front {
                Transition::PopFront
            } else {
                Transition::PopBack
            }),
            2 => value().prop_map(Transition::Remove),
            2 => index().prop_map(Transition::RemoveAt),
            1 => (index(), value()).prop_map(|(i, v)| Transition::Set(i, v)),
            1 => value().prop_map(Transition::CursorRemoveAll),
            1 => Just(Transition::Clear),
        ]
        .boxed()
    }

    fn apply(mut state: Self::State, transition: &Self::Transition) -> Self::State {
        match *transition {
            Transition::PushFront(v) => state.insert(0, v),
            Transition::PushBack(v) => state.push(v),
            Transition::Insert(i, v) => {
                if i <= state.len() {
                    state.insert(i, v);
                }
            }
            Transition::InsertAfter(t, v) => {
                let found = state.iter().position(|&x| x == t);
                if let Some(p) = found {
                    state.insert(p + 1, v);
                }
            }
            Transition::PopFront => {
                if !state.is_empty() {
                    state.remove(0);
                }
            }
            Transition::PopBack => {
                state.pop();
            }
            Transition::Remove(v) => {
                let found = state.iter().position(|&x| x == v);
                if let Some(p) = found {
                    state.remove(p);
                }
            }
            Transition::RemoveAt(i) => {
                if i < state.len() {
                    state.remove(i);
                }
            }
            Transition::Set(i, v) => {
                if let Some(slot) = state.get_mut(i) {
                    *slot = v;
                }
            }
            Transition::CursorRemoveAll(v) => state.retain(|&x| x != v),
            Transition::Clear => state.clear(),
        }
        state
    }
}

struct SeqListTest {
    list: SeqList<u32>,
    /// Mirror of the expected contents, used to predict each call's result.
    shadow: Vec<u32>,
}

impl SeqListTest {
    /// Asserts the generation moved iff the call changed the element count.
    fn check_generation(&self, before: u64, len_before: usize) {
        if self.list.len() == len_before {
            assert_eq!(self.list.generation(), before);
        } else {
            assert!(self.list.generation() > before);
        }
    }
}

impl StateMachineTest for SeqListTest {
    type SystemUnderTest = Self;
    type Reference = VecModel;

    fn init_test(
        _ref_state: &<Self::Reference as ReferenceStateMachine>::State,
    ) -> Self::SystemUnderTest {
        Self {
            list: SeqList::new(),
            shadow: Vec::new(),
        }
    }

    fn apply(
        mut state: Self::SystemUnderTest,
        _ref_state: &<Self::Reference as ReferenceStateMachine>::State,
        transition: Transition,
    ) -> Self::SystemUnderTest {
        let before = state.list.generation();
        let len_before = state.list.len();
        let len = state.shadow.len();

        match transition {
            Transition::PushFront(v) => {
                state.list.push_front(v);
                state.shadow.insert(0, v);
            }
            Transition::PushBack(v) => {
                state.list.push_back(v);
                state.shadow.push(v);
            }
            Transition::Insert(i, v) => {
                let result = state.list.insert(i, v);
                if i <= len {
                    assert_eq!(result, Ok(()));
                    state.shadow.insert(i, v);
                    assert_eq!(state.list.get(i), Ok(&v));
                } else {
                    assert_eq!(result, Err(Error::IndexOutOfRange { index: i, len }));
                }
            }
            Transition::InsertAfter(t, v) => {
                let result = state.list.insert_after(&t, v);
                let found = state.shadow.iter().position(|&x| x == t);
                match found {
                    Some(p) => {
                        assert_eq!(result, Ok(()));
                        state.shadow.insert(p + 1, v);
                    }
                    None => assert_eq!(result, Err(Error::NotFound)),
                }
            }
            Transition::PopFront => {
                let result = state.list.pop_front();
                if state.shadow.is_empty() {
                    assert_eq!(result, Err(Error::Empty));
                } else {
                    assert_eq!(result, Ok(state.shadow.remove(0)));
                }
            }
            Transition::PopBack => {
                let result = state.list.pop_back();
                assert_eq!(result, state.shadow.pop().ok_or(Error::Empty));
            }
            Transition::Remove(v) => {
                let result = state.list.remove(&v);
                let found = state.shadow.iter().position(|&x| x == v);
                match found {
                    Some(p) => assert_eq!(result, Ok(state.shadow.remove(p))),
                    None => assert_eq!(result, Err(Error::NotFound)),
                }
            }
            Transition::RemoveAt(i) => {
                let result = state.list.remove_at(i);
                if i < len {
                    assert_eq!(result, Ok(state.shadow.remove(i)));
                } else {
                    assert_eq!(result, Err(Error::IndexOutOfRange { index: i, len }));
                }
            }
            Transition::Set(i, v) => {
                let result = state.list.set(i, v);
                match state.shadow.get_mut(i) {
                    Some(slot) => {
                        assert_eq!(result, Ok(*slot));
                        *slot = v;
                    }
                    None => assert_eq!(result, Err(Error::IndexOutOfRange { index: i, len })),
                }
            }
            Transition::CursorRemoveAll(v) => {
                let mut cursor = state.list.cursor();
                while cursor.has_next() {
                    if *cursor.next(&state.list).unwrap() == v {
                        assert_eq!(cursor.remove(&mut state.list), Ok(v));
                    }
                }
                assert!(cursor.is_valid(&state.list));
                assert_eq!(cursor.next(&state.list), Err(Error::Empty));
                state.shadow.retain(|&x| x != v);
            }
            Transition::Clear => {
                state.list.clear();
                state.shadow.clear();
            }
        }

        state.check_generation(before, len_before);
        state
    }

    fn check_invariants(
        state: &Self::SystemUnderTest,
        ref_state: &<Self::Reference as ReferenceStateMachine>::State,
    ) {
        assert_eq!(state.list.len(), ref_state.len());
        assert_eq!(state.list.is_empty(), ref_state.is_empty());
        assert!(state.list.iter().eq(ref_state.iter()));
        assert_eq!(state.list.first().ok(), ref_state.first());
        assert_eq!(state.list.last().ok(), ref_state.last());
        assert_eq!(&state.shadow, ref_state);

        let rendered: Vec<String> = ref_state.iter().map(u32::to_string).collect();
        assert_eq!(state.list.to_string(), format!("[{}]", rendered.join(",")));
    }
}
