// 按下标读写的单链表
// 只有append、get、delete和size，不提供迭代器

// 所有权是一条链：List独占链头，每个节点独占自己的后继
// 没有Rc，没有裸指针，所以删除就是把所有权从被删节点手里转给前驱
// 代价是没有尾指针，append只能从头走到尾，O(n)
// 想要O(1)的append就得给尾部加一个裸指针，这里不这么做

// 下标接受任何能TryInto<usize>的整数
// 负数转换失败，和越界同样处理，这样就不用调用方先检查边界
use std::fmt::{ self, Debug };

use log::{ debug, trace };

use crate::error::IndexError;

pub struct LinkedList<T> {
    head: Link<T>,
    size: usize, // 始终等于从head沿next能走到的节点数
}

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    elem: T,
    next: Link<T>,
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        LinkedList {
            head: None,
            size: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Appends `elem` after the current last node. Never fails.
    pub fn append(&mut self, elem: T) {
        // 用循环而不是递归找尾巴，链表再长也不会爆栈
        // link是“指向下一个节点的那个槽位”，走到值为None的槽位就是尾巴后面
        let mut link = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }
        *link = Some(Box::new(Node { elem, next: None }));
        self.size += 1;
        trace!("appended element, size is now {}", self.size);
    }

    /// Returns the element at `index`, or `None` when `index` is negative or
    /// not below `size()`.
    ///
    /// A stored `Option<U>` comes back as `Some(&None)`, so an absent slot can
    /// never be confused with a stored "nothing".
    pub fn get<I: TryInto<usize>>(&self, index: I) -> Option<&T> {
        let index = self.checked(index).ok()?;
        self.node_at(index).map(|node| &node.elem)
    }

    pub fn get_mut<I: TryInto<usize>>(&mut self, index: I) -> Option<&mut T> {
        let index = self.checked(index).ok()?;
        self.locate(index).as_deref_mut().map(|node| &mut node.elem)
    }

    /// Like [`get`](Self::get), but reports why the index was rejected.
    pub fn try_get<I: TryInto<usize>>(&self, index: I) -> Result<&T, IndexError> {
        let index = self.checked(index)?;
        self.node_at(index)
            .map(|node| &node.elem)
            .ok_or(IndexError::OutOfBounds { index, size: self.size })
    }

    /// Removes the element at `index`. An out-of-range index is ignored.
    pub fn delete<I: TryInto<usize>>(&mut self, index: I) {
        self.remove(index);
    }

    /// Removes the element at `index` and hands it back, shifting every later
    /// element one position towards the head.
    pub fn remove<I: TryInto<usize>>(&mut self, index: I) -> Option<T> {
        match self.checked(index) {
            Ok(index) => self.unlink(index),
            Err(err) => {
                // 越界删除本身是静默的，留个日志方便排查
                debug!("ignoring removal: {}", err);
                None
            }
        }
    }

    pub fn try_delete<I: TryInto<usize>>(&mut self, index: I) -> Result<T, IndexError> {
        let index = self.checked(index)?;
        let size = self.size;
        self.unlink(index).ok_or(IndexError::OutOfBounds { index, size })
    }

    fn checked<I: TryInto<usize>>(&self, index: I) -> Result<usize, IndexError> {
        let index = index.try_into().map_err(|_| IndexError::Unrepresentable)?;
        if index < self.size {
            Ok(index)
        } else {
            Err(IndexError::OutOfBounds { index, size: self.size })
        }
    }

    // 调用前index必须已经检查过
    fn unlink(&mut self, index: usize) -> Option<T> {
        let link = self.locate(index);
        let mut node = link.take()?;
        // 前驱（或者链头）直接接上后继
        // take顺便把被删节点的next清空了
        *link = node.next.take();
        self.size -= 1;
        trace!("removed element at {}, size is now {}", index, self.size);
        Some(node.elem)
    }

    // 从链头走index步，返回装着第index个节点的槽位
    // index为0时槽位是self.head，否则是前驱的next
    // 拿到这个槽位就等于同时拿到了前驱和目标节点
    fn locate(&mut self, index: usize) -> &mut Link<T> {
        let mut link = &mut self.head;
        for _ in 0..index {
            match link {
                Some(node) => {
                    link = &mut node.next;
                }
                None => {
                    break;
                }
            }
        }
        link
    }

    // 只读版本，给get用
    fn node_at(&self, index: usize) -> Option<&Node<T>> {
        let mut node = self.head.as_deref();
        for _ in 0..index {
            node = node?.next.as_deref();
        }
        node
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

// 默认的析构是递归的：Box析构节点，节点析构next里的Box……
// 链表很长的时候会爆栈，所以手动一个一个拆
impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
            // node在这里离开作用域，它的next已经是None了
        }
    }
}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        let mut node = self.head.as_deref();
        while let Some(cur) = node {
            list.entry(&cur.elem);
            node = cur.next.as_deref();
        }
        list.finish()
    }
}


// proptest在miri下跑不动
#[cfg(all(not(miri), test))]
mod proptests {
    use proptest::prelude::*;

    use super::LinkedList;

    #[derive(Clone, Debug)]
    enum Op {
        Append(u32),
        Delete(i64),
    }

    // 下标故意包含负数和越界的值
    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            2 => any::<u32>().prop_map(Op::Append),
            1 => (-4i64..48).prop_map(Op::Delete),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 128,
            .. ProptestConfig::default()
        })]

        // Vec作为参照模型
        #[test]
        fn behaves_like_vec(ops in prop::collection::vec(op(), 0..200)) {
            let mut list = LinkedList::new();
            let mut model: Vec<u32> = Vec::new();

            for op in ops {
                match op {
                    Op::Append(value) => {
                        list.append(value);
                        model.push(value);
                    }
                    Op::Delete(index) => {
                        list.delete(index);
                        if let Ok(index) = usize::try_from(index) {
                            if index < model.len() {
                                model.remove(index);
                            }
                        }
                    }
                }
                prop_assert_eq!(list.size(), model.len());
            }

            for (i, value) in model.iter().enumerate() {
                prop_assert_eq!(list.get(i), Some(value));
            }
            prop_assert_eq!(list.get(model.len()), None);
            prop_assert_eq!(list.get(-1), None);
        }

        #[test]
        fn appends_keep_order(values in prop::collection::vec(any::<i32>(), 0..100)) {
            let mut list = LinkedList::new();
            for (k, value) in values.iter().enumerate() {
                list.append(*value);
                prop_assert_eq!(list.size(), k + 1);
            }
            for (i, value) in values.iter().enumerate() {
                prop_assert_eq!(list.get(i), Some(value));
            }
        }

        #[test]
        fn drain_then_refill(
            first in prop::collection::vec(any::<u8>(), 0..50),
            second in prop::collection::vec(any::<u8>(), 0..50),
        ) {
            let mut list = LinkedList::new();
            for value in &first {
                list.append(*value);
            }
            for _ in 0..list.size() {
                list.delete(0);
            }
            prop_assert_eq!(list.size(), 0);
            prop_assert_eq!(list.get(0), None);

            // 清空后再用和新建的一样
            let mut fresh = LinkedList::new();
            for value in &second {
                list.append(*value);
                fresh.append(*value);
            }
            prop_assert_eq!(list.size(), fresh.size());
            for i in 0..second.len() {
                prop_assert_eq!(list.get(i), fresh.get(i));
            }
        }
    }
}
