//! Dealing with Generalization: techniques for moving functionality
//! along the class inheritance hierarchy and for replacing inheritance
//! with delegation and vice versa.

use crate::models::{Category, EntryDraft, Field};

pub(crate) fn entries() -> Vec<EntryDraft> {
    vec![
        collapse_hierarchy(),
        extract_interface(),
        extract_subclass(),
        extract_superclass(),
        form_template_method(),
        pull_up_constructor_body(),
        pull_up_field(),
        pull_up_method(),
        push_down_field(),
        push_down_method(),
        replace_delegation_with_inheritance(),
        replace_inheritance_with_delegation(),
    ]
}

fn collapse_hierarchy() -> EntryDraft {
    EntryDraft::new("Collapse Hierarchy", Category::DealingWithGeneralization)
        .field(
            Field::Problem,
            "You have a class hierarchy in which a subclass is practically the same as its \
             superclass.",
        )
        .field(Field::Solution, "Merge the subclass and superclass.")
        .field(
            Field::WhyRefactor,
            "Your program has grown over time and a subclass and superclass have become \
             practically the same. A feature was removed from a subclass, a method was moved to \
             the superclass... and now you have two look-alike classes.",
        )
        .field(
            Field::Benefits,
            "- Program complexity is reduced. Fewer classes mean fewer things to keep straight \
             in your head and fewer breakable moving parts to worry about during future code \
             changes.\n\
             - Navigating through your code is easier when methods are defined in one class \
             early. You don’t need to comb through the entire hierarchy to find a particular \
             method.",
        )
        .field(
            Field::WhenNotToUse,
            "- Does the class hierarchy that you’re refactoring have more than one subclass? If \
             so, after refactoring is complete, the remaining subclasses should become the \
             inheritors of the class in which the hierarchy was collapsed.\n\
             - But keep in mind that this can lead to violations of the Liskov substitution \
             principle. For example, if your program emulates city transport networks and you \
             accidentally collapse the Transport superclass into the Car subclass, then the \
             Plane class may become the inheritor of Car. Oops!",
        )
        .field(
            Field::HowToRefactor,
            "1. Select which class is easier to remove: the superclass or its subclass.\n\
             2. Use Pull Up Field and Pull Up Method if you decide to get rid of the subclass. \
             If you choose to eliminate the superclass, go for Push Down Field and Push Down \
             Method.\n\
             3. Replace all uses of the class that you’re deleting with the class to which the \
             fields and methods are to be migrated. Often this will be code for creating \
             classes, variable and parameter typing, and documentation in code comments.\n\
             4. Delete the empty class.",
        )
}

fn extract_interface() -> EntryDraft {
    EntryDraft::new("Extract Interface", Category::DealingWithGeneralization)
        .field(
            Field::Problem,
            "Multiple clients are using the same part of a class interface. Another case: part \
             of the interface in two classes is the same.",
        )
        .field(
            Field::Solution,
            "Move this identical portion to its own interface.",
        )
        .field(
            Field::WhyRefactor,
            "1. Interfaces are very apropos when classes play special roles in different \
             situations. Use Extract Interface to explicitly indicate which role.\n\
             2. Another convenient case arises when you need to describe the operations that a \
             class performs on its server. If it’s planned to eventually allow use of servers \
             of multiple types, all servers must implement the interface.",
        )
        .field(
            Field::GoodToKnow,
            "There’s a certain resemblance between Extract Superclass and Extract Interface.\n\
             Extracting an interface allows isolating only common interfaces, not common code. \
             In other words, if classes contain Duplicate Code, extracting the interface won’t \
             help you to deduplicate.\n\
             All the same, this problem can be mitigated by applying Extract Class to move the \
             behavior that contains the duplication to a separate component and delegating all \
             the work to it. If the common behavior is large in size, you can always use \
             Extract Superclass. This is even easier, of course, but remember that if you take \
             this path you will get only one parent class.",
        )
        .field(
            Field::HowToRefactor,
            "1. Create an empty interface.\n\
             2. Declare common operations in the interface.\n\
             3. Declare the necessary classes as implementing the interface.\n\
             4. Change type declarations in the client code to use the new interface.",
        )
}

fn extract_subclass() -> EntryDraft {
    EntryDraft::new("Extract Subclass", Category::DealingWithGeneralization)
        .field(
            Field::Problem,
            "A class has features that are used only in certain cases.",
        )
        .field(
            Field::Solution,
            "Create a subclass and use it in these cases.",
        )
        .field(
            Field::WhyRefactor,
            "Your main class has methods and fields for implementing a certain rare use case \
             for the class. While the case is rare, the class is responsible for it and it \
             would be wrong to move all the associated fields and methods to an entirely \
             separate class. But they could be moved to a subclass, which is just what we’ll do \
             with the help of this refactoring technique.",
        )
        .field(
            Field::Benefits,
            "- Creates a subclass quickly and easily.\n\
             - You can create several separate subclasses if your main class is currently \
             implementing more than one such special case.",
        )
        .field(
            Field::Drawbacks,
            "Despite its seeming simplicity, Inheritance can lead to a dead end if you have to \
             separate several different class hierarchies. If, for example, you had the class \
             Dogs with different behavior depending on the size and fur of dogs, you could \
             tease out two hierarchies:\n\
             - by size: Large, Medium and Small\n\
             - by fur: Smooth and Shaggy\n\
             And everything would seem well, except that problems will crop up as soon as you \
             need to create a dog that’s both Large and Smooth, since you can create an object \
             from one class only. That said, you can avoid this problem by using Compose \
             instead of Inherit (see the Strategy pattern). In other words, the Dog class will \
             have two component fields, size and fur. You will plug in component objects from \
             the necessary classes into these fields. So you can create a Dog that has \
             LargeSize and ShaggyFur.",
        )
        .field(
            Field::HowToRefactor,
            "1. Create a new subclass from the class of interest.\n\
             2. If you need additional data to create objects from a subclass, create a \
             constructor and add the necessary parameters to it. Don’t forget to call the \
             constructor’s parent implementation.\n\
             3. Find all calls to the constructor of the parent class. When the functionality \
             of a subclass is necessary, replace the parent constructor with the subclass \
             constructor.\n\
             4. Move the necessary methods and fields from the parent class to the subclass. \
             Do this via Push Down Method and Push Down Field. It’s simpler to start by moving \
             the methods first. This way, the fields remain accessible throughout the whole \
             process: from the parent class prior to the move, and from the subclass itself \
             after the move is complete.\n\
             5. After the subclass is ready, find all the old fields that controlled the \
             choice of functionality. Delete these fields by using polymorphism to replace all \
             the operators in which the fields had been used. A simple example: in the Car \
             class, you had the field is_electric_car and, depending on it, in the refuel() \
             method the car is either fueled up with gas or charged with electricity. \
             Post-refactoring, the is_electric_car field is removed and the Car and \
             ElectricCar classes will have their own implementations of the refuel() method.",
        )
}

fn extract_superclass() -> EntryDraft {
    EntryDraft::new("Extract Superclass", Category::DealingWithGeneralization)
        .field(
            Field::Problem,
            "You have two classes with common fields and methods.",
        )
        .field(
            Field::Solution,
            "Create a shared superclass for them and move all the identical fields and methods \
             to it.",
        )
        .field(
            Field::WhyRefactor,
            "One type of code duplication occurs when two classes perform similar tasks in the \
             same way, or perform similar tasks in different ways. Objects offer a built-in \
             mechanism for simplifying such situations via inheritance. But oftentimes this \
             similarity remains unnoticed until classes are created, necessitating that an \
             inheritance structure be created later.",
        )
        .field(
            Field::Benefits,
            "Code deduplication. Common fields and methods now “live” in one place only.",
        )
        .field(
            Field::WhenNotToUse,
            "You can not apply this technique to classes that already have a superclass.",
        )
        .field(
            Field::HowToRefactor,
            "1. Create an abstract superclass.\n\
             2. Use Pull Up Field, Pull Up Method, and Pull Up Constructor Body to move the \
             common functionality to a superclass. Start with the fields, since in addition to \
             the common fields you will need to move the fields that are used in the common \
             methods.\n\
             3. Look for places in the client code where use of subclasses can be replaced \
             with your new class (such as in type declarations).",
        )
}

fn form_template_method() -> EntryDraft {
    EntryDraft::new("Form Template Method", Category::DealingWithGeneralization)
        .field(
            Field::Problem,
            "Your subclasses implement algorithms that contain similar steps in the same order.",
        )
        .field(
            Field::Solution,
            "Move the algorithm structure and identical steps to a superclass, and leave \
             implementation of the different steps in the subclasses.",
        )
        .field(
            Field::WhyRefactor,
            "Subclasses are developed in parallel, sometimes by different people, which leads \
             to code duplication, errors, and difficulties in code maintenance, since each \
             change must be made in all subclasses.",
        )
        .field(
            Field::Benefits,
            "- Code duplication does’t always refer to cases of simple copy/paste. Often \
             duplication occurs at a higher level, such as when you have a method for sorting \
             numbers and a method for sorting object collections that are differentiated only \
             by the comparison of elements. Creating a template method eliminates this \
             duplication by merging the shared algorithm steps in a superclass and leaving \
             just the differences in the subclasses.\n\
             - Forming a template method is an example of the Open/Closed Principle in action. \
             When a new algorithm version appears, you need only to create a new subclass; no \
             changes to existing code are required.",
        )
        .field(
            Field::HowToRefactor,
            "1. Split algorithms in the subclasses into their constituent parts described in \
             separate methods. Extract Method can help with this.\n\
             2. The resulting methods that are identical for all subclasses can be moved to a \
             superclass via Pull Up Method.\n\
             3. The non-similar methods can be given consistent names via Rename Method.\n\
             4. Move the signatures of non-similar methods to a superclass as abstract ones by \
             using Pull Up Method. Leave their implementations in the subclasses.\n\
             5. And finally, pull up the main method of the algorithm to the superclass. Now \
             it should work with the method steps described in the superclass, both real and \
             abstract.",
        )
}

fn pull_up_constructor_body() -> EntryDraft {
    EntryDraft::new("Pull Up Constructor Body", Category::DealingWithGeneralization)
        .field(
            Field::Problem,
            r#"Your subclasses have constructors with code that’s mostly identical.
impl Manager {
    fn new(name: String, id: String, grade: i32) -> Self {
        Manager {
            name,
            id,
            grade,
        }
    }
    // ...
}"#,
        )
        .field(
            Field::Solution,
            r#"Create a superclass constructor and move the code that’s the same in the subclasses to it. Call the superclass constructor in the subclass constructors.
impl Manager {
    fn new(name: String, id: String, grade: i32) -> Self {
        Manager {
            employee: Employee::new(name, id),
            grade,
        }
    }
    // ...
}"#,
        )
        .field(
            Field::WhyRefactor,
            "How is this refactoring technique different from Pull Up Method?\n\
             1. In Java, subclasses can’t inherit a constructor, so you can’t simply apply \
             Pull Up Method to the subclass constructor and delete it after removing all the \
             constructor code to the superclass. In addition to creating a constructor in the \
             superclass it’s necessary to have constructors in the subclasses with simple \
             delegation to the superclass constructor.\n\
             2. In C++ and Java (if you did’t explicitly call the superclass constructor) the \
             superclass constructor is automatically called prior to the subclass constructor, \
             which makes it necessary to move the common code only from the beginning of the \
             subclass constructors (since you won’t be able to call the superclass constructor \
             from an arbitrary place in a subclass constructor).\n\
             3. In most programming languages, a subclass constructor can have its own list of \
             parameters different from the parameters of the superclass. Therefore you should \
             create a superclass constructor only with the parameters that it truly needs.",
        )
        .field(
            Field::HowToRefactor,
            "1. Create a constructor in a superclass.\n\
             2. Extract the common code from the beginning of the constructor of each subclass \
             to the superclass constructor. Before doing so, try to move as much common code \
             as possible to the beginning of the constructor.\n\
             3. Place the call for the superclass constructor in the first line in the \
             subclass constructors.",
        )
}

fn pull_up_field() -> EntryDraft {
    EntryDraft::new("Pull Up Field", Category::DealingWithGeneralization)
        .field(Field::Problem, "Two classes have the same field.")
        .field(
            Field::Solution,
            "Remove the field from subclasses and move it to the superclass.",
        )
        .field(
            Field::WhyRefactor,
            "Subclasses grew and developed separately, causing identical (or nearly identical) \
             fields and methods to appear.",
        )
        .field(
            Field::Benefits,
            "- Eliminates duplication of fields in subclasses.\n\
             - Eases subsequent relocation of duplicate methods, if they exist, from \
             subclasses to a superclass.",
        )
        .field(
            Field::HowToRefactor,
            "1. Make sure that the fields are used for the same needs in subclasses.\n\
             2. If the fields have different names, give them the same name and replace all \
             references to the fields in existing code.\n\
             3. Create a field with the same name in the superclass. Note that if the fields \
             were private, the superclass field should be protected.\n\
             4. Remove the fields from the subclasses.\n\
             5. You may want to consider using Self Encapsulate Field for the new field, in \
             order to hide it behind access methods.",
        )
}

fn pull_up_method() -> EntryDraft {
    EntryDraft::new("Pull Up Method", Category::DealingWithGeneralization)
        .field(
            Field::Problem,
            "Your subclasses have methods that perform similar work.",
        )
        .field(
            Field::Solution,
            "Make the methods identical and then move them to the relevant superclass.",
        )
        .field(
            Field::WhyRefactor,
            "Subclasses grew and developed independently of one another, causing identical (or \
             nearly identical) fields and methods.",
        )
        .field(
            Field::Benefits,
            "- Gets rid of duplicate code. If you need to make changes to a method, it’s \
             better to do so in a single place than have to search for all duplicates of the \
             method in subclasses.\n\
             - This refactoring technique can also be used if, for some reason, a subclass \
             redefines a superclass method but performs what’s essentially the same work.",
        )
        .field(
            Field::HowToRefactor,
            "1. Investigate similar methods in superclasses. If they aren’t identical, format \
             them to match each other.\n\
             2. If methods use a different set of parameters, put the parameters in the form \
             that you want to see in the superclass.\n\
             3. Copy the method to the superclass. Here you may find that the method code uses \
             fields and methods that exist only in subclasses and therefore aren’t available \
             in the superclass. To solve this, you can:\n\
             - For fields: use either Pull Up Field or Self-Encapsulate Field to create \
             getters and setters in subclasses; then declare these getters abstractly in the \
             superclass.\n\
             - For methods: use either Pull Up Method or declare abstract methods for them in \
             the superclass (note that your class will become abstract if it was’t \
             previously).\n\
             4. Remove the methods from the subclasses.\n\
             5. Check the locations in which the method is called. In some places you may be \
             able to replace use of a subclass with the superclass.",
        )
}

fn push_down_field() -> EntryDraft {
    EntryDraft::new("Push Down Field", Category::DealingWithGeneralization)
        .field(Field::Problem, "Is a field used only in a few subclasses?")
        .field(Field::Solution, "Move the field to these subclasses.")
        .field(
            Field::WhyRefactor,
            "Although it was planned to use a field universally for all classes, in reality \
             the field is used only in some subclasses. This situation can occur when planned \
             features fail to pan out, for example.\n\
             This can also occur due to extraction (or removal) of part of the functionality \
             of class hierarchies.",
        )
        .field(
            Field::Benefits,
            "- Improves internal class coherency. A field is located where it’s actually \
             used.\n\
             - When moving to several subclasses simultaneously, you can develop the fields \
             independently of each other. This does create code duplication, yes, so push down \
             fields only when you really do intend to use the fields in different ways.",
        )
        .field(
            Field::HowToRefactor,
            "1. Declare a field in all the necessary subclasses.\n\
             2. Remove the field from the superclass.",
        )
}

fn push_down_method() -> EntryDraft {
    EntryDraft::new("Push Down Method", Category::DealingWithGeneralization)
        .field(
            Field::Problem,
            "Is behavior implemented in a superclass used by only one (or a few) subclasses?",
        )
        .field(Field::Solution, "Move this behavior to the subclasses.")
        .field(
            Field::WhyRefactor,
            "At first a certain method was meant to be universal for all classes but in \
             reality is used in only one subclass. This situation can occur when planned \
             features fail to materialize.\n\
             Such situations can also occur after partial extraction (or removal) of \
             functionality from a class hierarchy, leaving a method that’s used in only one \
             subclass.\n\
             If you see that a method is needed by more than one subclass, but not all of \
             them, it may be useful to create an intermediate subclass and move the method to \
             it. This allows avoiding the code duplication that would result from pushing a \
             method down to all subclasses.",
        )
        .field(
            Field::Benefits,
            "Improves class coherence. A method is located where you expect to see it.",
        )
        .field(
            Field::HowToRefactor,
            "1. Declare the method in a subclass and copy its code from the superclass.\n\
             2. Remove the method from the superclass.\n\
             3. Find all places where the method is used and verify that it’s called from the \
             necessary subclass.",
        )
}

fn replace_delegation_with_inheritance() -> EntryDraft {
    EntryDraft::new(
        "Replace Delegation with Inheritance",
        Category::DealingWithGeneralization,
    )
    .field(
        Field::Problem,
        "A class contains many simple methods that delegate to all methods of another class.",
    )
    .field(
        Field::Solution,
        "Make the class a delegate inheritor, which makes the delegating methods unnecessary.",
    )
    .field(
        Field::WhyRefactor,
        "Delegation is a more flexible approach than inheritance, since it allows changing how \
         delegation is implemented and placing other classes there as well. Nonetheless, \
         delegation stops being beneficial if you delegate actions to only one class and all \
         of its public methods.\n\
         In such a case, if you replace delegation with inheritance, you cleanse the class of \
         a large number of delegating methods and spare yourself from needing to create them \
         for each new delegate class method.",
    )
    .field(
        Field::Benefits,
        "Reduces code length. All these delegating methods are no longer necessary.",
    )
    .field(
        Field::WhenNotToUse,
        "- Don’t use this technique if the class contains delegation to only a portion of the \
         public methods of the delegate class. By doing so, you would violate the Liskov \
         substitution principle.\n\
         - This technique can be used only if the class still does’t have parents.",
    )
    .field(
        Field::HowToRefactor,
        "1. Make the class a subclass of the delegate class.\n\
         2. Place the current object in a field containing a reference to the delegate \
         object.\n\
         3. Delete the methods with simple delegation one by one. If their names were \
         different, use Rename Method to give all the methods a single name.\n\
         4. Replace all references to the delegate field with references to the current \
         object.\n\
         5. Remove the delegate field.",
    )
}

fn replace_inheritance_with_delegation() -> EntryDraft {
    EntryDraft::new(
        "Replace Inheritance with Delegation",
        Category::DealingWithGeneralization,
    )
    .field(
        Field::Problem,
        "You have a subclass that uses only a portion of the methods of its superclass (or \
         it’s not possible to inherit superclass data).",
    )
    .field(
        Field::Solution,
        "Create a field and put a superclass object in it, delegate methods to the superclass \
         object, and get rid of inheritance.",
    )
    .field(
        Field::WhyRefactor,
        "Replacing inheritance with composition can substantially improve class design if:\n\
         - Your subclass violates the Liskov substitution principle, i.e., if inheritance was \
         implemented only to combine common code but not because the subclass is an extension \
         of the superclass.\n\
         - The subclass uses only a portion of the methods of the superclass. In this case, \
         it’s only a matter of time before someone calls a superclass method that he or she \
         was’t supposed to call.\n\
         In essence, this refactoring technique splits both classes and makes the superclass \
         the helper of the subclass, not its parent. Instead of inheriting all superclass \
         methods, the subclass will have only the necessary methods for delegating to the \
         methods of the superclass object.",
    )
    .field(
        Field::Benefits,
        "- A class does’t contain any unneeded methods inherited from the superclass.\n\
         - Various objects with various implementations can be put in the delegate field. In \
         effect you get the Strategy design pattern.",
    )
    .field(
        Field::Drawbacks,
        "You have to write many simple delegating methods.",
    )
    .field(
        Field::HowToRefactor,
        "1. Create a field in the subclass for holding the superclass. During the initial \
         stage, place the current object in it.\n\
         2. Change the subclass methods so that they use the superclass object instead of \
         self.\n\
         3. For methods inherited from the superclass that are called in the client code, \
         create simple delegating methods in the subclass.\n\
         4. Remove the inheritance declaration from the subclass.\n\
         5. Change the initialization code of the field in which the former superclass is \
         stored by creating a new object.",
    )
}
