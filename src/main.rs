use linked_lists::SinglyLinkedList;

fn main() {
    let mut sll = SinglyLinkedList::new();
    sll.append(5);
    sll.append(10);
    sll.for_each_value(|val| println!("Node->data: {val}"));
}
